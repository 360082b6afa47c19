//! Minting client: the single-shot shielded mint flow.
//!
//! # Data Flow
//! ```text
//! config (contract, recipient, function)
//!     → encode: ABI-encode the mint call
//!     → encrypt-and-send: shield the calldata, build and broadcast the tx
//!     → confirm: poll until the receipt reaches confirmation depth
//! ```
//!
//! One invocation mints exactly one token to one recipient. Each phase either
//! completes or aborts the whole run; there are no retries.

use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::chain::client::ChainClient;
use crate::chain::tx::TxBuilder;
use crate::chain::types::{ChainError, ChainResult, ConfirmationStatus};
use crate::chain::wallet::Wallet;
use crate::config::schema::MintTargetConfig;
use crate::shield::ShieldClient;

sol! {
    /// Mints one token to `to`.
    function safeMint(address to);
}

/// One wei-denominated token, shown to the operator as "1.0".
const MINT_AMOUNT_WEI: u64 = 1_000_000_000_000_000_000;

/// Result of a completed mint run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    /// Hash of the single transaction this run produced.
    pub tx_hash: TxHash,
    /// Block the transaction was included in.
    pub block_number: u64,
}

/// ABI-encode the configured mint call.
///
/// This is the first point where the configured addresses are parsed; the
/// config layer passes them through untouched, so a leftover placeholder
/// fails here, before any network traffic.
pub fn encode_call(function_name: &str, recipient: &str) -> ChainResult<Bytes> {
    if function_name != "safeMint" {
        return Err(ChainError::UnknownFunction(function_name.to_string()));
    }

    let to: Address = recipient.parse().map_err(|e: alloy::primitives::hex::FromHexError| {
        ChainError::InvalidAddress {
            field: "recipient",
            value: recipient.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(safeMintCall { to }.abi_encode().into())
}

/// Parse the target contract address as configured.
pub fn parse_contract_address(contract_address: &str) -> ChainResult<Address> {
    contract_address
        .parse()
        .map_err(|e: alloy::primitives::hex::FromHexError| ChainError::InvalidAddress {
            field: "contract",
            value: contract_address.to_string(),
            reason: e.to_string(),
        })
}

/// The minting client.
///
/// Holds the three collaborators the flow needs: the chain client for
/// broadcast and queries, the shield client for calldata encryption, and the
/// transaction builder for assembly and confirmation.
pub struct MintClient {
    target: MintTargetConfig,
    chain: ChainClient,
    shield: ShieldClient,
    builder: TxBuilder,
}

impl MintClient {
    /// Create a minting client from configured collaborators.
    pub fn new(
        target: MintTargetConfig,
        chain: ChainClient,
        shield: ShieldClient,
        wallet: Wallet,
    ) -> Self {
        let builder = TxBuilder::new(chain.clone(), wallet);
        Self {
            target,
            chain,
            shield,
            builder,
        }
    }

    /// Run the flow: encode, encrypt-and-send, confirm.
    ///
    /// Produces exactly one on-chain transaction, or none at all if any phase
    /// before submission fails.
    pub async fn run(&self) -> ChainResult<MintOutcome> {
        let amount_minted = format_ether(U256::from(MINT_AMOUNT_WEI));
        tracing::info!("Minting {} token...", amount_minted);

        // Phase 1: encode
        let contract = parse_contract_address(&self.target.contract_address)?;
        let calldata = encode_call(&self.target.function_name, &self.target.recipient)?;

        // Phase 2: encrypt and send
        let shielded = self.shield.encrypt_calldata(&calldata).await?;
        let tx = self.builder.build(contract, U256::ZERO, shielded).await?;
        let tx_hash = self.chain.send_transaction(tx).await?;
        tracing::info!("Transaction submitted! Transaction hash: {}", tx_hash);

        // Phase 3: confirm
        match self.builder.wait_for_confirmation(tx_hash).await? {
            ConfirmationStatus::Confirmed { block_number } => {
                tracing::info!(
                    "Transaction completed successfully! {} Non-Fungible Token minted to {}.",
                    amount_minted,
                    self.target.recipient
                );
                tracing::info!("Transaction hash: {}", tx_hash);
                Ok(MintOutcome {
                    tx_hash,
                    block_number,
                })
            }
            ConfirmationStatus::Failed(reason) => Err(ChainError::Reverted(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn test_encode_call_selector_and_argument() {
        let calldata = encode_call("safeMint", RECIPIENT).unwrap();
        // 4-byte selector + one 32-byte padded address
        assert_eq!(calldata.len(), 36);
        assert_eq!(&calldata[..4], &safeMintCall::SELECTOR);
        // Address occupies the low 20 bytes of the argument word
        assert_eq!(&calldata[16..36], RECIPIENT.parse::<Address>().unwrap().as_slice());
    }

    #[test]
    fn test_encode_call_rejects_unknown_function() {
        let err = encode_call("mintBatch", RECIPIENT).unwrap_err();
        assert!(matches!(err, ChainError::UnknownFunction(_)));
    }

    #[test]
    fn test_placeholder_recipient_fails_at_encode() {
        // The untouched placeholder from a fresh config dies here, not in
        // config loading
        let err = encode_call("safeMint", "<Replace with Recipient Address>").unwrap_err();
        match err {
            ChainError::InvalidAddress { field, value, .. } => {
                assert_eq!(field, "recipient");
                assert_eq!(value, "<Replace with Recipient Address>");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_length_address_fails_at_encode() {
        let err = encode_call("safeMint", "0x1234").unwrap_err();
        assert!(matches!(err, ChainError::InvalidAddress { .. }));
    }

    #[test]
    fn test_parse_contract_address() {
        assert!(parse_contract_address(RECIPIENT).is_ok());
        let err = parse_contract_address("<Replace with Contract Address>").unwrap_err();
        match err {
            ChainError::InvalidAddress { field, .. } => assert_eq!(field, "contract"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_amount_display_matches_original_block() {
        // 10^18 wei renders as one whole token
        let amount = format_ether(U256::from(MINT_AMOUNT_WEI));
        assert!(amount.starts_with("1."));
    }
}
