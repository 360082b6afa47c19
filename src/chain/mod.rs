//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key)
//!     → wallet.rs (key loading, signing identity)
//!     → client.rs (RPC connection with timeouts, broadcast)
//!     → tx.rs (build, confirm)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod tx;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{ChainError, ChainId, ChainResult, ConfirmationStatus, NetworkConfig};
pub use wallet::Wallet;
