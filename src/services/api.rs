// src/services/api.rs

//! Review API client.
//!
//! One GET request per poll cycle, parameterized by the watermark
//! timestamp. Retry policy lives in the supervisor, not here.

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::config::{Credentials, ENDPOINT, REQUEST_TIMEOUT};
use crate::error::{AppError, Result};

/// Client for the homework review API.
pub struct ReviewApiClient {
    client: Client,
    endpoint: Url,
    token: String,
}

impl ReviewApiClient {
    /// Create a client against the production endpoint.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_endpoint(credentials, ENDPOINT)
    }

    /// Create a client against an arbitrary endpoint.
    pub fn with_endpoint(credentials: &Credentials, endpoint: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            endpoint: Url::parse(endpoint)?,
            token: credentials.practicum_token.clone(),
        })
    }

    /// Build the request URL for a given watermark.
    ///
    /// The watermark is embedded verbatim as the `from_date` query
    /// parameter, the inclusive lower bound of the poll window.
    pub fn request_url(&self, watermark: i64) -> Result<Url> {
        let url = Url::parse_with_params(
            self.endpoint.as_str(),
            &[("from_date", watermark.to_string())],
        )?;
        Ok(url)
    }

    /// Fetch review statuses changed since `watermark`.
    ///
    /// Strictly HTTP 200 counts as success; every other status, and the
    /// absence of any response at all, is a `ResponseStatus` failure.
    pub async fn fetch(&self, watermark: i64) -> Result<Value> {
        let url = self.request_url(watermark)?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|error| {
                log::debug!("API request failed in transit: {error}");
                AppError::ResponseStatus { status: None }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AppError::ResponseStatus {
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
