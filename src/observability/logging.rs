//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Configure log level via `RUST_LOG` with a sensible default
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Status lines the operator reads (minting, submission, completion) are
//!   emitted at info level; diagnostics at error level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to info for this crate.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shielded_mint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
