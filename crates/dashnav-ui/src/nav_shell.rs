//! Navigation shell: fixed header with the nav bar and breadcrumb trail,
//! and the content area nested screens mount into.

use dashnav_core::{NavChrome, NavMenu, WalletSession};
use dioxus::prelude::*;

use crate::breadcrumbs::MainNavBreadcrumbs;
use crate::nav_bar::MainNavBar;
use crate::page_info::NavHierarchy;

#[component]
pub fn NavShell(
    hierarchy: NavHierarchy,
    menu: NavMenu,
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let wallet = use_signal(WalletSession::new);

    // Re-derived on every hierarchy change; reading subscribes this shell.
    let chrome = hierarchy.with(|pages| NavChrome::derive(&menu, pages));
    let offset = chrome.content_offset();
    let main_class = if chrome.tall_nav() { "main-content tall-nav" } else { "main-content" };

    rsx! {
        div {
            class: "nav-shell",
            nav {
                class: "main-nav",
                MainNavBar { items: chrome.items.clone(), wallet, on_navigate }
                if chrome.tall_nav() {
                    MainNavBreadcrumbs { breadcrumbs: chrome.breadcrumbs.clone(), on_navigate }
                }
            }
            main {
                class: "{main_class}",
                style: "padding-top: {offset}px;",
                {children}
            }
        }
    }
}
