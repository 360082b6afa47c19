//! Confidentiality service subsystem.
//!
//! # Data Flow
//! ```text
//! plaintext calldata (ABI-encoded)
//!     → client.rs (JSON-RPC to the configured endpoint)
//!     → encrypted bytes (transaction data field)
//! ```
//!
//! The cryptography lives in the service; this crate only consumes the
//! encrypt/decrypt operations it exposes.

pub mod client;

pub use client::ShieldClient;
