//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MintConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; one config per run
//! - All fields have defaults so a run works with no config file at all
//! - Validation separates syntactic (serde) from semantic checks
//! - Chain addresses are never validated or normalized by this crate

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::MintConfig;
pub use schema::MintTargetConfig;
pub use schema::NetworkConfig;
