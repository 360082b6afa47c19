//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → operator console (stdout/stderr)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Console lines are human-readable status, not a parseable format

pub mod logging;
