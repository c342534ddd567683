//! reqwest-based commit API client
//!
//! Direct implementation of the `CommitApi` trait. Every call is a plain
//! GET without caching, retries or timeouts.

use crate::client::CommitApi;
use crate::error::ClientError;
use crate::route::CommitRoute;
use crate::types::{CommitInfo, DiffFile};
use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Where the backend lives
///
/// Built once from configuration and injected into the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalize a base URL
    ///
    /// The URL must be absolute http(s). Trailing slashes are trimmed so
    /// joined paths always have exactly one separator.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&trimmed).map_err(|e| ClientError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: raw,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self { base_url: trimmed })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Commit API client talking HTTP to the backend
#[derive(Debug, Clone)]
pub struct HttpCommitClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl HttpCommitClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("commit-viewer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ClientError::Transport {
                url: config.base_url().to_string(),
                source,
            })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.config.url_for(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        serde_json::from_slice(&body)
            .map_err(|source| ClientError::MalformedResponse { url, source })
    }
}

#[async_trait]
impl CommitApi for HttpCommitClient {
    async fn fetch_commit(&self, route: &CommitRoute) -> Result<CommitInfo, ClientError> {
        debug!("Fetching commit info for {}", route);
        self.get_json(&route.commit_path()).await
    }

    async fn fetch_diff(&self, route: &CommitRoute) -> Result<Vec<DiffFile>, ClientError> {
        debug!("Fetching diff for {}", route);
        let files: Vec<DiffFile> = self.get_json(&route.diff_path()).await?;
        debug!("Fetched {} changed files for {}", files.len(), route);
        Ok(files)
    }
}
