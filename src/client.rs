//! HTTP client for a running dashboard server.
//!
//! Used by the `status` command. The base URL points at the server root; API
//! paths are appended under `/api/v1`.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::{ChartResponse, Health};
use crate::models::{Controls, PieChart, SiteFilter};

/// Default URL for a local server.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8050";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the dashboard API.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: String,
    client: Client,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = format!("{}/api/v1{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    /// Server liveness and number of loaded records.
    pub async fn health(&self) -> Result<Health, ClientError> {
        self.get("/health", &[]).await
    }

    pub async fn controls(&self) -> Result<Controls, ClientError> {
        self.get("/controls", &[]).await
    }

    pub async fn success_pie(&self, site: &SiteFilter) -> Result<PieChart, ClientError> {
        let response: ChartResponse<PieChart> = self
            .get("/charts/success-pie", &[("site", site.as_str())])
            .await?;
        Ok(response.chart)
    }
}
