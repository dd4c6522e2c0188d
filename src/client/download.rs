// file: src/client/download.rs
// description: fetches a result document from its download url to disk

use crate::error::{Result, SearchError};
use crate::utils::Validator;
use reqwest::StatusCode;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::SearchClient;

const FALLBACK_FILE_NAME: &str = "document.bin";

impl SearchClient {
    /// Fetch a document from `url` into `output_dir`, returning the written
    /// path. The local name comes from the URL's final path segment.
    pub async fn download(&self, url: &str, output_dir: &Path) -> Result<PathBuf> {
        Validator::validate_url(url)?;

        debug!("GET {}", url);
        let response = self.http().get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Api { status, detail });
        }

        let bytes = response.bytes().await?;
        let target = write_document(output_dir, &file_name_from_url(url), &bytes)?;

        info!("Downloaded {} bytes to {}", bytes.len(), target.display());
        Ok(target)
    }
}

fn write_document(output_dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let target = output_dir.join(file_name);
    fs::write(&target, bytes)?;
    Ok(target)
}

/// Local file name for a download URL: the final path segment, stripped of
/// query/fragment and sanitized. URLs with no path fall back to a fixed
/// name.
pub fn file_name_from_url(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = without_query
        .split_once("://")
        .map_or(without_query, |(_, rest)| rest);

    let segment = match after_scheme.split_once('/') {
        Some((_, path)) => path.trim_end_matches('/').rsplit('/').next().unwrap_or(""),
        None => "",
    };

    let name = Validator::sanitize_file_name(segment);
    if name.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        name
    }
}
