// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, SearchError};
use crate::models::Department;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub search: SearchConfig,
    pub display: DisplayConfig,
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub department: Department,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub max_summary_chars: usize,
    pub show_scores: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadConfig {
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("DOC_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            endpoint: EndpointConfig {
                url: "http://localhost:7071/api/http_trigger".to_string(),
            },
            search: SearchConfig {
                department: Department::All,
            },
            display: DisplayConfig {
                max_summary_chars: 300,
                show_scores: true,
            },
            download: DownloadConfig {
                output_dir: PathBuf::from("./downloads"),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.endpoint.url.starts_with("http://") && !self.endpoint.url.starts_with("https://") {
            return Err(SearchError::Config(format!(
                "endpoint.url must be an http(s) URL: {}",
                self.endpoint.url
            )));
        }

        if self.display.max_summary_chars == 0 {
            return Err(SearchError::Config(
                "max_summary_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
