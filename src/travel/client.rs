//! Client for the booking-com15 attraction endpoints on RapidAPI.

use crate::config::ToolsConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;

const SEARCH_LOCATION_PATH: &str = "/api/v1/attraction/searchLocation";
const ATTRACTION_REVIEWS_PATH: &str = "/api/v1/attraction/getAttractionReviews";

/// Failure talking to the travel API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Network failure, timeout, or a non-2xx status.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body was not JSON.
    #[error("response body is not valid JSON: {source}")]
    InvalidJson {
        source: serde_json::Error,
        body: String,
    },
}

/// Travel-data API client.
#[derive(Clone)]
pub struct TravelClient {
    base_url: String,
    api_host: String,
    api_key: String,
    http: reqwest::Client,
}

impl fmt::Debug for TravelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TravelClient")
            .field("base_url", &self.base_url)
            .field("api_host", &self.api_host)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TravelClient {
    /// Create a new client. Every request is bounded by `timeout`.
    pub fn new(base_url: &str, api_host: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_host: api_host.to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &ToolsConfig) -> Result<Self> {
        let api_key = config.resolved_api_key()?;
        Self::new(
            &config.api_base_url,
            &config.api_host,
            &api_key,
            config.request_timeout(),
        )
    }

    /// Search attractions near a location.
    pub async fn search_location(
        &self,
        query: &str,
        language_code: &str,
    ) -> Result<Value, UpstreamError> {
        self.get_json(
            SEARCH_LOCATION_PATH,
            &[("query", query), ("languagecode", language_code)],
        )
        .await
    }

    /// Fetch one page of reviews for an attraction.
    pub async fn get_attraction_reviews(&self, id: &str, page: &str) -> Result<Value, UpstreamError> {
        self.get_json(ATTRACTION_REVIEWS_PATH, &[("id", id), ("page", page)])
            .await
    }

    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Sending request to {} with params: {:?}", url, params);

        let resp = self
            .http
            .get(&url)
            .header("x-rapidapi-host", &self.api_host)
            .header("x-rapidapi-key", &self.api_key)
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| UpstreamError::InvalidJson { source, body })
    }
}
