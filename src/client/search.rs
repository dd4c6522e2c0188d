// file: src/client/search.rs
// description: JSON POST client for the document search endpoint

use crate::config::EndpointConfig;
use crate::error::{Result, SearchError};
use crate::models::{SearchRequest, SearchResponse};
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

const RAW_PREVIEW_CHARS: usize = 500;

pub struct SearchClient {
    client: Client,
    url: String,
}

impl SearchClient {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.url.clone(),
        }
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Issue the single search request. Exactly status 200 is success; any
    /// other status has its body captured for the log and becomes an `Api`
    /// error.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        debug!(
            "POST {} (query: {} chars, department: {})",
            self.url,
            request.query.len(),
            request.department
        );

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Error fetching data: {} - {}", status, detail);
            return Err(SearchError::Api { status, detail });
        }

        let raw = response.text().await?;

        let parsed: SearchResponse = serde_json::from_str(&raw).map_err(|e| {
            SearchError::Decode(format!(
                "{} (raw response, first {} chars: {})",
                e,
                RAW_PREVIEW_CHARS,
                raw.chars().take(RAW_PREVIEW_CHARS).collect::<String>()
            ))
        })?;

        if let Some(service_error) = &parsed.error {
            debug!("Endpoint reported a service-side error: {}", service_error);
        }

        debug!(
            "Received {} document(s), answer present: {}",
            parsed.document_count(),
            parsed.answer().is_some()
        );

        Ok(parsed)
    }
}
