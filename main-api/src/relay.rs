//! Auxiliary service client
//!
//! Typed upstream shapes and the single fetch path every handler goes
//! through. Bodies that fail to deserialize are surfaced as errors, never
//! as partial data.

use crate::error::RelayError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tracing::info;

const AUX_URL_ENV: &str = "AUX_SERVICE_URL";
const DEFAULT_AUX_URL: &str = "http://localhost:8001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
pub struct AuxBucketListing {
    pub buckets: Vec<String>,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct AuxParameterListing {
    pub parameters: Vec<String>,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct AuxParameterValue {
    pub parameter: String,
    pub version: String,
}

/// HTTP client for the auxiliary service, built once at startup.
#[derive(Clone)]
pub struct AuxClient {
    http: Client,
    base_url: String,
}

impl AuxClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Build from the environment, with a loopback default.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var(AUX_URL_ENV).unwrap_or_else(|_| DEFAULT_AUX_URL.to_string());
        info!("Auxiliary service URL: {}", base_url);

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::new(http, base_url))
    }

    pub async fn list_buckets(&self) -> Result<AuxBucketListing, RelayError> {
        self.fetch("/s3-buckets").await
    }

    pub async fn list_parameters(&self) -> Result<AuxParameterListing, RelayError> {
        self.fetch("/parameters").await
    }

    pub async fn get_parameter(&self, name: &str) -> Result<AuxParameterValue, RelayError> {
        self.fetch(&format!("/parameter/{name}")).await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, RelayError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(RelayError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::UpstreamStatus { status, body });
        }

        response.json::<T>().await.map_err(RelayError::Malformed)
    }
}
