//! Error model used by Designer News API client operations.

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DesignerNewsError>;

/// Represents the failures a Designer News request can end in: an HTTP status with a message, a timeout, a network issue, a payload that could not be decoded, or anything else unexpected.
#[derive(Debug, Error)]
pub enum DesignerNewsError {
    #[error("http {status}: {message}")]
    Http { status: StatusCode, message: String },
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl DesignerNewsError {
    /// Constructs an HTTP error variant.
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        DesignerNewsError::Http {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DesignerNewsError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DesignerNewsError {
    /// Converts reqwest errors into semantic DesignerNewsError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DesignerNewsError::Timeout(err.to_string())
        } else if err.is_status() {
            let status = err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            DesignerNewsError::http(status, err.to_string())
        } else if err.is_connect() {
            DesignerNewsError::Network(err.to_string())
        } else if err.is_decode() {
            DesignerNewsError::Serialization(err.to_string())
        } else {
            DesignerNewsError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DesignerNewsError {
    /// Converts serde_json decode/encode failures into serialization errors.
    fn from(err: serde_json::Error) -> Self {
        DesignerNewsError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::DesignerNewsError;
    use reqwest::StatusCode;

    #[test]
    fn http_error_display_includes_status_and_message() {
        let err = DesignerNewsError::http(
            StatusCode::NOT_FOUND,
            "Error getting comments 404 Not Found",
        );
        assert_eq!(
            err.to_string(),
            "http 404 Not Found: Error getting comments 404 Not Found"
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn json_failures_map_to_serialization() {
        let parse = serde_json::from_str::<u64>("not-json").unwrap_err();
        let err = DesignerNewsError::from(parse);
        assert!(matches!(err, DesignerNewsError::Serialization(_)));
        assert_eq!(err.status(), None);
    }
}
