//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query chain state (block number, nonce, gas price, receipts)
//! - Sign and broadcast transactions through the wallet
//! - Handle timeouts and network errors gracefully

use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::chain::types::{ChainError, ChainId, ChainResult, NetworkConfig};
use crate::chain::wallet::Wallet;

/// Blockchain RPC client wrapper.
///
/// Holds a single provider for the configured endpoint; the same endpoint
/// also serves the confidentiality service, reached separately by the shield
/// client.
#[derive(Clone)]
pub struct ChainClient {
    /// Provider with the wallet attached for transaction signing.
    provider: Arc<dyn Provider + Send + Sync>,
    /// Configuration.
    config: NetworkConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a new chain client.
    ///
    /// # Arguments
    /// * `config` - Network configuration
    /// * `wallet` - Signing identity for outgoing transactions
    ///
    /// # Returns
    /// A new client or error if the endpoint URL is invalid
    pub async fn new(config: NetworkConfig, wallet: &Wallet) -> ChainResult<Self> {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);

        let rpc_url: url::Url = config.rpc_url.parse().map_err(|e| {
            ChainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        let provider = Arc::new(
            ProviderBuilder::new()
                .wallet(wallet.network_wallet())
                .connect_http(rpc_url),
        ) as Arc<dyn Provider + Send + Sync>;

        let client = Self {
            provider,
            config: config.clone(),
            timeout_duration,
        };

        // Verify chain ID matches configuration
        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    rpc_url = %config.rpc_url,
                    chain_id = config.chain_id,
                    "Chain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Chain client initialized but chain verification failed"
                );
                // Don't fail initialization - the send will surface real errors
            }
        }

        Ok(client)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ChainResult<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id.0 != self.config.chain_id {
            return Err(ChainError::ChainMismatch {
                expected: self.config.chain_id,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<ChainId> {
        self.call("chain id", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        self.call("block number", self.provider.get_block_number()).await
    }

    /// Get the transaction count (nonce) for an address.
    pub async fn get_transaction_count(&self, address: Address) -> ChainResult<u64> {
        use std::future::IntoFuture;
        self.call(
            "transaction count",
            self.provider.get_transaction_count(address).into_future(),
        )
        .await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> ChainResult<u128> {
        self.call("gas price", self.provider.get_gas_price()).await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ChainResult<Option<TransactionReceipt>> {
        self.call("receipt", self.provider.get_transaction_receipt(tx_hash))
            .await
    }

    /// Sign and broadcast a transaction, returning its hash.
    ///
    /// The request must be fully populated (nonce, gas, chain id); the
    /// provider signs with the attached wallet and submits the raw bytes.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> ChainResult<TxHash> {
        let fut = self.provider.send_transaction(tx);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Transaction submission failed: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Get the number of confirmation blocks required.
    pub fn confirmation_blocks(&self) -> u32 {
        self.config.confirmation_blocks
    }

    async fn call<T, F>(&self, what: &str, fut: F) -> ChainResult<T>
    where
        F: std::future::Future<Output = alloy::transports::TransportResult<T>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("Failed to get {}: {}", what, e))),
            Err(_) => Err(ChainError::Timeout(self.config.rpc_timeout_secs)),
        }
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
