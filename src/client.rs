use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::api::models::{StatusResponse, WithdrawRequest};
use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("wallet api request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// HTTP client for a provider's wallet API.
///
/// Requests are independent: nothing is cached, deduplicated, or
/// cancelled, and every call issues a fresh request against the base URL.
pub struct WalletApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl WalletApiClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, ClientError> {
        Url::parse(base_url)?;

        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}` — provider status and wallet address.
    pub async fn fetch_index(&self) -> Result<StatusResponse, ClientError> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// `GET {base}/version` — the payload shape is the daemon's business,
    /// so it comes back as plain JSON.
    pub async fn fetch_version(&self) -> Result<serde_json::Value, ClientError> {
        let response = self
            .http
            .get(format!("{}/version", self.base_url))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// `POST {base}/withdraw/` with the form urlencoded.
    pub async fn submit_withdrawal(
        &self,
        request: &WithdrawRequest,
    ) -> Result<serde_json::Value, ClientError> {
        let response = self
            .http
            .post(format!("{}/withdraw/", self.base_url))
            .form(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_urls() {
        assert!(matches!(
            WalletApiClient::new("not a url", Duration::from_secs(1)),
            Err(ClientError::BaseUrl(_))
        ));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let client = WalletApiClient::new("http://localhost:3334/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3334");
    }
}
