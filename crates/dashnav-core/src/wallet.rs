//! Wallet connection model.
//!
//! The wallet lives in an external extension reached through a
//! [`WalletProvider`]. Its state is entirely separate from the page
//! hierarchy: a failed or rejected connection only produces a notice in the
//! wallet dialog.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::WalletError;

/// Options passed to the extension's `connect` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    pub only_if_trusted: bool,
}

/// Successful connection result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnection {
    pub public_key: String,
}

/// One-shot request/response bridge to a wallet extension.
#[async_trait(?Send)]
pub trait WalletProvider {
    async fn connect(&self, options: ConnectOptions) -> Result<WalletConnection, WalletError>;
}

/// Notice shown when no extension is present.
pub const NOT_INSTALLED_NOTICE: &str = "No wallet extension found. Install one to connect.";

/// Notice shown for any other connection failure.
pub const CONNECT_FAILED_NOTICE: &str = "Connecting to the wallet failed.";

/// State behind the wallet management dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletSession {
    pub dialog_open: bool,
    pub connecting: bool,
    pub connected_address: Option<String>,
    pub notice: Option<String>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_dialog(&mut self) {
        self.dialog_open = !self.dialog_open;
        if !self.dialog_open {
            self.notice = None;
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected_address.is_some()
    }

    /// Marks a connection attempt as started and returns the options to use.
    pub fn begin_connect(&mut self) -> ConnectOptions {
        self.connecting = true;
        self.notice = None;
        ConnectOptions {
            only_if_trusted: false,
        }
    }

    /// Applies the outcome of a connection attempt.
    pub fn finish_connect(&mut self, result: Result<WalletConnection, WalletError>) {
        self.connecting = false;
        match result {
            Ok(connection) => {
                info!(public_key = %connection.public_key, "wallet connected");
                self.connected_address = Some(connection.public_key);
                self.notice = None;
            }
            Err(e) => {
                error!(error = %e, "wallet connection failed");
                self.connected_address = None;
                self.notice = Some(
                    match e {
                        WalletError::NotInstalled => NOT_INSTALLED_NOTICE,
                        WalletError::Rejected(_) | WalletError::Bridge(_) => CONNECT_FAILED_NOTICE,
                    }
                    .to_string(),
                );
            }
        }
    }

    /// Forgets the connected address locally.
    pub fn disconnect(&mut self) {
        if let Some(address) = self.connected_address.take() {
            info!(public_key = %address, "wallet disconnected");
        }
    }

    /// Hides the current notice without closing the dialog.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
