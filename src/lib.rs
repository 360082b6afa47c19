//! Shielded NFT Minting Client Library

pub mod chain;
pub mod config;
pub mod mint;
pub mod observability;
pub mod shield;

pub use chain::{ChainClient, ChainError, ChainResult, Wallet};
pub use config::MintConfig;
pub use mint::{MintClient, MintOutcome};
pub use shield::ShieldClient;
