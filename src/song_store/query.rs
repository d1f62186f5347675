//! Typed construction of song listing queries.
//!
//! Filters are collected as [`Predicate`]s and rendered with numbered `?N`
//! placeholders; user input only ever travels as a bound value.

use super::errors::{SongError, SongResult};
use super::models::SongFilter;
use super::schema::SONG_COLUMNS;
use rusqlite::types::Value;

/// Scalar function registered on every connection, lower-cases with Unicode rules.
/// SQLite's builtin `lower()` and `LIKE` only fold ASCII.
pub const UNICODE_LOWER_FN: &str = "unicode_lower";

const LIKE_ESCAPE: char = '\\';

/// Lower-cases `s` for case-insensitive matching. Final sigma is folded to
/// `σ` since its lower-case form depends on the position in the word.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase().replace('ς', "σ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SongColumn {
    Group,
    Title,
    ReleaseDate,
    Lyrics,
}

impl SongColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            SongColumn::Group => "groups",
            SongColumn::Title => "song",
            SongColumn::ReleaseDate => "release_date",
            SongColumn::Lyrics => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Equals,
    ContainsIgnoreCase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predicate {
    pub column: SongColumn,
    pub op: Operator,
    pub value: String,
}

impl Predicate {
    fn render(&self, placeholder: usize) -> String {
        let column = self.column.column_name();
        match self.op {
            Operator::Equals => format!("{} = ?{}", column, placeholder),
            Operator::ContainsIgnoreCase => format!(
                "{}({}) LIKE ?{} ESCAPE '{}'",
                UNICODE_LOWER_FN, column, placeholder, LIKE_ESCAPE
            ),
        }
    }

    fn bound_value(&self) -> Value {
        match self.op {
            Operator::Equals => Value::Text(self.value.clone()),
            Operator::ContainsIgnoreCase => Value::Text(format!(
                "%{}%",
                escape_like_pattern(&fold_case(&self.value))
            )),
        }
    }
}

fn escape_like_pattern(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// A listing query: AND-joined predicates, newest release first, one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongQuery {
    predicates: Vec<Predicate>,
    limit: i64,
    offset: i64,
}

impl SongQuery {
    pub fn new(page: i64, limit: i64) -> SongResult<Self> {
        if page < 1 {
            return Err(SongError::Validation(format!(
                "page must be at least 1, got {}",
                page
            )));
        }
        if limit < 1 {
            return Err(SongError::Validation(format!(
                "limit must be at least 1, got {}",
                limit
            )));
        }
        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| SongError::Validation(format!("page {} is out of range", page)))?;

        Ok(Self {
            predicates: Vec::new(),
            limit,
            offset,
        })
    }

    pub fn from_filter(filter: &SongFilter) -> SongResult<Self> {
        let mut query = Self::new(filter.page, filter.limit)?;
        query.push(
            SongColumn::Group,
            Operator::ContainsIgnoreCase,
            filter.group.as_deref(),
        );
        query.push(
            SongColumn::ReleaseDate,
            Operator::Equals,
            filter.release_date.as_deref(),
        );
        query.push(
            SongColumn::Lyrics,
            Operator::ContainsIgnoreCase,
            filter.lyrics.as_deref(),
        );
        query.push(
            SongColumn::Title,
            Operator::ContainsIgnoreCase,
            filter.title.as_deref(),
        );
        Ok(query)
    }

    /// Adds a predicate unless `value` is absent or empty.
    pub fn push(&mut self, column: SongColumn, op: Operator, value: Option<&str>) {
        match value {
            Some(value) if !value.is_empty() => self.predicates.push(Predicate {
                column,
                op,
                value: value.to_string(),
            }),
            _ => {}
        }
    }

    #[cfg(test)]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    #[cfg(test)]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Renders the SQL text together with the values to bind, in placeholder order.
    pub fn render(&self) -> (String, Vec<Value>) {
        let mut sql = format!("SELECT {} FROM songs", SONG_COLUMNS);
        let mut values = Vec::with_capacity(self.predicates.len() + 2);

        if !self.predicates.is_empty() {
            let conditions: Vec<String> = self
                .predicates
                .iter()
                .enumerate()
                .map(|(i, predicate)| predicate.render(i + 1))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
            values.extend(self.predicates.iter().map(Predicate::bound_value));
        }

        let limit_placeholder = values.len() + 1;
        sql.push_str(&format!(
            " ORDER BY release_date DESC, rowid ASC LIMIT ?{} OFFSET ?{}",
            limit_placeholder,
            limit_placeholder + 1
        ));
        values.push(Value::Integer(self.limit));
        values.push(Value::Integer(self.offset));

        (sql, values)
    }
}
