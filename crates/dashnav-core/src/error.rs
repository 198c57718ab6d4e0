//! Error types for the dashboard navigation chrome.
//!
//! Hierarchy operations never fail: release races and stale handles are
//! no-ops. Errors only come from the edges (wallet extension, config files).

use thiserror::Error;

/// Errors from the external wallet extension
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Wallet extension not installed")]
    NotInstalled,

    #[error("Connection rejected: {0}")]
    Rejected(String),

    #[error("Wallet bridge failure: {0}")]
    Bridge(String),
}

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
