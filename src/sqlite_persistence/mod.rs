mod versioned_schema;

pub use versioned_schema::*;

/// Offset added to the schema version before it is written to `PRAGMA user_version`,
/// so that a database created by some other tool (user_version = 0) is never
/// mistaken for one of ours.
pub const BASE_DB_VERSION: usize = 77000;
