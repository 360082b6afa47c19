//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, multiplier sane)
//! - Check the RPC endpoint is a parseable URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MintConfig → Result<(), Vec<ValidationError>>
//! - Chain addresses are NOT checked here. They travel to the chain layer
//!   exactly as the operator wrote them and fail there if malformed.

use crate::config::schema::MintConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Config field the error refers to (e.g., "network.rpc_url").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &MintConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.network.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError {
            field: "network.rpc_url".to_string(),
            message: format!("not a valid URL: {}", e),
        });
    }

    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "network.rpc_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.network.confirmation_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "network.confirmation_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.network.gas_price_multiplier < 1.0 {
        errors.push(ValidationError {
            field: "network.gas_price_multiplier".to_string(),
            message: "must be at least 1.0".to_string(),
        });
    }

    if config.mint.function_name.is_empty() {
        errors.push(ValidationError {
            field: "mint.function_name".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
