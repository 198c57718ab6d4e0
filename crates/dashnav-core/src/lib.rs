//! Navigation chrome core for the dashboard.
//!
//! Screens register [`PageDescriptor`]s into a [`PageHierarchyStore`] as they
//! mount and release them as they unmount. The shell derives the breadcrumb
//! trail and the highlighted nav item from the current hierarchy with pure
//! functions, so every piece here is testable without a renderer.

pub mod active;
pub mod breadcrumb;
pub mod chrome;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod nav_items;
pub mod registration;
pub mod store;
pub mod wallet;

pub use active::active_section;
pub use breadcrumb::{derive_breadcrumbs, Breadcrumb};
pub use chrome::{NavChrome, NavItemView, BREADCRUMBS_HEIGHT, MAIN_NAV_HEIGHT};
pub use config::{DashboardConfig, MetricsConfig};
pub use descriptor::{PageDescriptor, PathSegment, PATH_ROOT};
pub use error::{ConfigError, WalletError};
pub use nav_items::{
    default_nav_items, FeatureGate, NavItem, NavMenu, GRAFANA_DISABLED, METRICS_ITEM_ID,
};
pub use registration::{PageRegistration, SharedHierarchy};
pub use store::{HierarchyObserver, ObserverId, PageHierarchyStore, RegistrationHandle};
pub use wallet::{ConnectOptions, WalletConnection, WalletProvider, WalletSession};
