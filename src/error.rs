//! Domain error types for rebaja
//!
//! Provides structured error types for different domains:
//! - `ClipboardError` for the copy flow
//! - `RebajaError` as the top-level error type
//!
//! Price parsing is deliberately *not* an error domain: unparseable input
//! means "no valid amount entered" and surfaces as `None` from
//! `money::parse_amount`.

use thiserror::Error;

/// Top-level error type for rebaja
#[derive(Debug, Error)]
pub enum RebajaError {
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Errors raised while copying the final price
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("System clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Copy failed: {0}")]
    CopyFailed(String),
}

/// Result type alias for RebajaError
pub type Result<T> = std::result::Result<T, RebajaError>;
