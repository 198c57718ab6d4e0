//! Dioxus components for the dashboard navigation chrome.
//!
//! [`NavShell`] draws the nav bar and breadcrumb trail from a
//! [`NavHierarchy`]; nested screens join the hierarchy with [`PageInfo`] or
//! [`use_page_info`].

pub mod breadcrumbs;
pub mod nav_bar;
pub mod nav_shell;
pub mod page_info;
pub mod wallet_bridge;
pub mod wallet_dialog;

pub use breadcrumbs::MainNavBreadcrumbs;
pub use nav_bar::MainNavBar;
pub use nav_shell::NavShell;
pub use page_info::{use_nav_hierarchy, use_page_info, NavHierarchy, PageInfo};
pub use wallet_bridge::WebviewWallet;
pub use wallet_dialog::{WalletButton, WalletDialog};

/// Shared CSS for the chrome.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
