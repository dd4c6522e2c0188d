// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Request to search endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Search endpoint returned status {status}: {detail}")]
    Api {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("Failed to decode search response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// User-facing alert line. Endpoint and transport detail stays in the
    /// log, never in the alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "Please enter a search query.",
            SearchError::Api { .. } => "Error fetching data. Please try again.",
            SearchError::Request(_) | SearchError::Decode(_) => {
                "An error occurred. Please try again."
            }
            SearchError::Config(_) => "Configuration problem. Check your config file.",
            SearchError::Validation(_) => "Invalid input. Please check and try again.",
            SearchError::Io(_) => "A local file operation failed.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_alert() {
        assert_eq!(
            SearchError::EmptyQuery.user_message(),
            "Please enter a search query."
        );
    }

    #[test]
    fn test_api_alert_hides_detail() {
        let err = SearchError::Api {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            detail: "stack trace from the backend".to_string(),
        };
        assert_eq!(err.user_message(), "Error fetching data. Please try again.");
        assert!(!err.user_message().contains("stack trace"));
    }

    #[test]
    fn test_decode_alert_is_generic() {
        let err = SearchError::Decode("expected value at line 1 column 1".to_string());
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }
}
