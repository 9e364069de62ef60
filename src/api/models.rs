use serde::{Deserialize, Serialize};

/// Body of `GET /`: what the provider is up to and where its wallet lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,
    #[serde(rename = "build")]
    pub commit: String,
    #[serde(rename = "chain-id")]
    pub chain_id: String,
}

/// Withdrawal form fields, submitted urlencoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub to_address: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
