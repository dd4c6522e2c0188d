// file: src/utils/validation.rs
// description: input validation utilities and helpers

use crate::error::{Result, SearchError};

pub struct Validator;

impl Validator {
    /// A query that is empty after trimming never reaches the network.
    pub fn validate_query(query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(SearchError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Character-boundary-safe truncation with a trailing ellipsis.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let truncated: String = text.chars().take(max_chars).collect();
            format!("{}...", truncated)
        }
    }

    /// Strip path separators and traversal sequences from a candidate local
    /// file name.
    pub fn sanitize_file_name(name: &str) -> String {
        name.replace(['/', '\\'], "")
            .replace("..", "")
            .trim()
            .to_string()
    }
}
