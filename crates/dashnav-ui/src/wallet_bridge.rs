//! Wallet provider backed by the browser extension injected into the
//! webview (`window.solana`).

use async_trait::async_trait;
use dashnav_core::{ConnectOptions, WalletConnection, WalletError, WalletProvider};
use dioxus::prelude::*;
use serde::Deserialize;

/// Reply shape produced by [`connect_script`].
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
enum BridgeReply {
    Ok {
        #[serde(rename = "publicKey")]
        public_key: String,
    },
    Missing,
    Error {
        message: String,
    },
}

impl From<BridgeReply> for Result<WalletConnection, WalletError> {
    fn from(reply: BridgeReply) -> Self {
        match reply {
            BridgeReply::Ok { public_key } => Ok(WalletConnection { public_key }),
            BridgeReply::Missing => Err(WalletError::NotInstalled),
            BridgeReply::Error { message } => Err(WalletError::Rejected(message)),
        }
    }
}

fn connect_script(options: ConnectOptions) -> Result<String, WalletError> {
    let options = serde_json::to_string(&options).map_err(|e| WalletError::Bridge(e.to_string()))?;
    Ok(format!(
        r#"
        const provider = window.solana;
        if (!provider || !provider.isPhantom) {{
            return {{ status: "missing" }};
        }}
        try {{
            const response = await provider.connect({options});
            return {{ status: "ok", publicKey: response.publicKey.toString() }};
        }} catch (err) {{
            return {{ status: "error", message: String((err && err.message) || err) }};
        }}
        "#
    ))
}

/// Talks to the wallet extension through the webview's JS bridge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebviewWallet;

#[async_trait(?Send)]
impl WalletProvider for WebviewWallet {
    async fn connect(&self, options: ConnectOptions) -> Result<WalletConnection, WalletError> {
        let script = connect_script(options)?;
        let reply: BridgeReply = document::eval(&script)
            .join()
            .await
            .map_err(|e| WalletError::Bridge(format!("{e:?}")))?;
        reply.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_embeds_options() {
        let script = connect_script(ConnectOptions::default()).unwrap();
        assert!(script.contains(r#"provider.connect({"onlyIfTrusted":false})"#));
    }

    #[test]
    fn test_reply_mapping() {
        let ok: BridgeReply = serde_json::from_str(r#"{"status":"ok","publicKey":"abc"}"#).unwrap();
        assert_eq!(
            Result::<WalletConnection, WalletError>::from(ok),
            Ok(WalletConnection {
                public_key: "abc".to_string()
            })
        );

        let missing: BridgeReply = serde_json::from_str(r#"{"status":"missing"}"#).unwrap();
        assert_eq!(
            Result::<WalletConnection, WalletError>::from(missing),
            Err(WalletError::NotInstalled)
        );

        let rejected: BridgeReply =
            serde_json::from_str(r#"{"status":"error","message":"User rejected"}"#).unwrap();
        assert_eq!(
            Result::<WalletConnection, WalletError>::from(rejected),
            Err(WalletError::Rejected("User rejected".to_string()))
        );
    }
}
