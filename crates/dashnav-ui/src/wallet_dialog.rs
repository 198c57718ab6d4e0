//! Wallet management action and dialog in the nav bar.

use dashnav_core::WalletSession;
use dioxus::prelude::*;

use crate::wallet_bridge::WebviewWallet;

/// Nav bar button that toggles the wallet dialog.
#[component]
pub fn WalletButton(session: Signal<WalletSession>) -> Element {
    let mut session = session;
    rsx! {
        button {
            class: "nav-action",
            title: "Manage Wallet",
            onclick: move |_| session.write().toggle_dialog(),
            "\u{1F45B}"
        }
    }
}

/// Connect/disconnect dialog. Renders nothing while closed.
#[component]
pub fn WalletDialog(session: Signal<WalletSession>) -> Element {
    let mut session = session;
    let state = session.read().clone();

    if !state.dialog_open {
        return rsx! {};
    }

    let connect = move |_| {
        let options = session.write().begin_connect();
        spawn(async move {
            let result = dashnav_core::WalletProvider::connect(&WebviewWallet, options).await;
            session.write().finish_connect(result);
        });
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| session.write().toggle_dialog(),
            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "dialog-title", "Wallet Management" }
                div {
                    class: "dialog-content",
                    if let Some(address) = &state.connected_address {
                        p { "Connected Address: {address}" }
                    } else {
                        p { "You are not connected to a wallet. Connect now?" }
                    }
                    if let Some(notice) = &state.notice {
                        div {
                            class: "dialog-notice",
                            span { "{notice}" }
                            button {
                                class: "dialog-notice-dismiss",
                                title: "Dismiss",
                                onclick: move |_| session.write().dismiss_notice(),
                                "\u{00D7}"
                            }
                        }
                    }
                }
                div {
                    class: "dialog-actions",
                    button {
                        class: "dialog-btn",
                        onclick: move |_| session.write().toggle_dialog(),
                        "Close"
                    }
                    if state.is_connected() {
                        button {
                            class: "dialog-btn secondary",
                            onclick: move |_| session.write().disconnect(),
                            "Disconnect"
                        }
                    } else {
                        button {
                            class: "dialog-btn primary",
                            disabled: state.connecting,
                            onclick: connect,
                            if state.connecting { "Connecting..." } else { "Connect" }
                        }
                    }
                }
            }
        }
    }
}
