//! Transaction building and confirmation monitoring.
//!
//! # Responsibilities
//! - Build a fully populated legacy transaction request
//! - Guard against gas price spikes
//! - Poll for the receipt until the required confirmation depth

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::chain::wallet::Wallet;

/// Transaction builder for the mint flow.
pub struct TxBuilder {
    client: ChainClient,
    wallet: Wallet,
}

impl TxBuilder {
    /// Create a new transaction builder.
    pub fn new(client: ChainClient, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build a transaction request with the current chain nonce and gas price.
    ///
    /// # Arguments
    /// * `to` - Destination address
    /// * `value` - Amount of native token to send
    /// * `data` - Call data (already shielded by the caller)
    pub async fn build(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> ChainResult<TransactionRequest> {
        let nonce = self.client.get_transaction_count(self.wallet.address()).await?;

        let gas_price = self.client.get_gas_price().await?;
        let gas_price_gwei = gas_price / 1_000_000_000;

        // Check against max gas price
        let config = self.client.config();
        if gas_price_gwei > config.max_gas_price_gwei as u128 {
            return Err(ChainError::GasPriceTooHigh {
                current_gwei: gas_price_gwei as u64,
                max_gwei: config.max_gas_price_gwei,
            });
        }

        // Apply multiplier for safety margin
        let adjusted_gas_price = (gas_price as f64 * config.gas_price_multiplier) as u128;

        // Base gas + data cost (16 gas per byte, simplified). The node cannot
        // estimate gas for shielded calldata, so the limit is computed here.
        let gas_limit = 21000u64 + (data.len() as u64 * 16);

        let tx = TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(to)
            .with_value(value)
            .with_input(data)
            .with_nonce(nonce)
            .with_gas_price(adjusted_gas_price)
            .with_chain_id(self.wallet.chain_id())
            .with_gas_limit(gas_limit);

        Ok(tx)
    }

    /// Wait for a transaction to be confirmed.
    ///
    /// # Arguments
    /// * `tx_hash` - Transaction hash to monitor
    pub async fn wait_for_confirmation(&self, tx_hash: TxHash) -> ChainResult<ConfirmationStatus> {
        let required_confirmations = self.client.confirmation_blocks();
        let timeout_secs = self.client.config().confirmation_timeout_secs;
        let timeout_duration = Duration::from_secs(timeout_secs);
        let poll_interval = Duration::from_secs(2);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                // Get the receipt
                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                // Check if transaction succeeded
                if !receipt.status() {
                    return Ok(ConfirmationStatus::Failed(
                        "Transaction reverted".to_string(),
                    ));
                }

                // Get current block number
                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = (current_block.saturating_sub(tx_block) + 1) as u32;

                if confirmations >= required_confirmations {
                    return Ok(ConfirmationStatus::Confirmed {
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(ChainError::ConfirmationTimeout(timeout_secs)),
        }
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }
}
