//! Error types for connection-extract.
//!
//! Extraction itself degrades to empty fields instead of failing. The
//! variants here cover bad caller input and the optional enhancer stage.

/// Error type for extraction and enhancement operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL supplied in `Options::url` could not be parsed.
    #[error("invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No enhancer is configured (returned by `NoopEnhancer`).
    #[error("enhancer unavailable")]
    EnhancerUnavailable,

    /// The enhancer collaborator failed to produce a response.
    #[error("enhancer failed: {0}")]
    Enhancer(String),

    /// The enhancer response did not contain a usable JSON object.
    #[error("malformed enhancer response: {0}")]
    MalformedResponse(String),

    /// JSON decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::EnhancerUnavailable.to_string(), "enhancer unavailable");
        assert_eq!(
            Error::MalformedResponse("no object".into()).to_string(),
            "malformed enhancer response: no object"
        );
    }

    #[test]
    fn test_url_error_converts() {
        let err: Error = match url::Url::parse("not a url") {
            Ok(_) => panic!("expected parse failure"),
            Err(e) => e.into(),
        };
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
