use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// CORS for browser clients. An empty origin list allows any origin.
pub fn make_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    if allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_origin_when_empty() {
        assert!(make_cors_layer(&[]).is_ok());
    }

    #[test]
    fn accepts_listed_origins() {
        let origins = vec!["http://localhost:5173".to_string()];
        assert!(make_cors_layer(&origins).is_ok());
    }

    #[test]
    fn rejects_invalid_origin() {
        let origins = vec!["bad\norigin".to_string()];
        assert!(make_cors_layer(&origins).is_err());
    }
}
