// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod utils;

pub use client::SearchClient;
pub use config::{Config, DisplayConfig, DownloadConfig, EndpointConfig, SearchConfig};
pub use error::{Result, SearchError};
pub use models::{Department, DocumentHit, SearchRequest, SearchResponse};
pub use render::{ResultRenderer, SearchSpinner, format_answer};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _request = SearchRequest::new("query", Department::All);
    }
}
