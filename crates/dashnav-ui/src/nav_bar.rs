//! Top navigation bar: logo, section links, and the action area.

use dashnav_core::{NavItemView, WalletSession};
use dioxus::prelude::*;

use crate::wallet_dialog::{WalletButton, WalletDialog};

#[component]
pub fn MainNavBar(
    items: Vec<NavItemView>,
    wallet: Signal<WalletSession>,
    on_navigate: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "main-nav-bar",
            a {
                class: "nav-logo",
                href: "/",
                onclick: move |evt| {
                    evt.prevent_default();
                    on_navigate.call("/".to_string());
                },
                span { class: "nav-logo-mark", "\u{25C8}" }
            }
            for view in items.iter() {
                {
                    let item_class = if view.highlighted { "nav-item highlighted" } else { "nav-item" };
                    let path = view.item.path.clone();
                    rsx! {
                        a {
                            class: "{item_class}",
                            href: "{view.item.path}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                on_navigate.call(path.clone());
                            },
                            "{view.item.title}"
                        }
                    }
                }
            }
            div { class: "flex-spacer" }
            div {
                class: "nav-actions",
                WalletButton { session: wallet }
            }
            WalletDialog { session: wallet }
        }
    }
}
