//! Confidentiality service client.
//!
//! # Responsibilities
//! - Encrypt ABI-encoded calldata before it is placed in a transaction
//! - Decrypt node responses (exposed by the service, unused by the mint flow)
//!
//! The service is reached over JSON-RPC at the same endpoint as the chain
//! node. Payloads travel as 0x-prefixed hex strings.

use alloy::primitives::Bytes;
use serde::Deserialize;
use std::time::Duration;

use crate::chain::types::{ChainError, ChainResult};

const ENCRYPT_METHOD: &str = "shield_encryptCallData";
const DECRYPT_METHOD: &str = "shield_decryptNodeResponse";

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Bytes>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Client for the node's confidentiality service.
#[derive(Debug, Clone)]
pub struct ShieldClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ShieldClient {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: &str, timeout_secs: u64) -> ChainResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ChainError::Shield(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            http,
        })
    }

    /// Encrypt calldata for use as a shielded transaction's data field.
    ///
    /// The returned bytes replace the plaintext entirely; on-chain observers
    /// never see the encoded call.
    pub async fn encrypt_calldata(&self, plaintext: &Bytes) -> ChainResult<Bytes> {
        let encrypted = self.request(ENCRYPT_METHOD, plaintext).await?;
        tracing::debug!(
            plaintext_len = plaintext.len(),
            encrypted_len = encrypted.len(),
            "Calldata encrypted"
        );
        Ok(encrypted)
    }

    /// Decrypt a node response produced by a shielded call.
    ///
    /// Part of the service interface; the mint flow itself never reads
    /// encrypted responses.
    pub async fn decrypt_node_response(&self, encrypted: &Bytes) -> ChainResult<Bytes> {
        self.request(DECRYPT_METHOD, encrypted).await
    }

    async fn request(&self, method: &str, payload: &Bytes) -> ChainResult<Bytes> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": [payload],
        });

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChainError::Shield(format!("{} request failed: {}", method, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::Shield(format!(
                "{} returned HTTP {}",
                method, status
            )));
        }

        let parsed: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| ChainError::Shield(format!("{} response invalid: {}", method, e)))?;

        if let Some(err) = parsed.error {
            return Err(ChainError::Shield(format!(
                "{} rejected ({}): {}",
                method, err.code, err.message
            )));
        }

        parsed
            .result
            .ok_or_else(|| ChainError::Shield(format!("{} returned no result", method)))
    }
}
