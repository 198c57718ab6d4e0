//! Static top-level navigation destinations and the readiness gate that
//! hides one of them until its backing subsystem is available.

use serde::{Deserialize, Serialize};

/// Id of the item hidden until the metrics subsystem is ready.
pub const METRICS_ITEM_ID: &str = "metrics";

/// Grafana host value meaning the metrics integration is turned off.
pub const GRAFANA_DISABLED: &str = "DISABLED";

/// A top-level nav destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub path: String,
    pub id: String,
}

impl NavItem {
    pub fn new(title: impl Into<String>, path: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            id: id.into(),
        }
    }
}

/// The dashboard's default destinations, in display order.
pub fn default_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Overview", "/overview", "overview"),
        NavItem::new("Jobs", "/jobs", "jobs"),
        NavItem::new("Serve", "/serve", "serve"),
        NavItem::new("Cluster", "/cluster", "cluster"),
        NavItem::new("Actors", "/actors", "actors"),
        NavItem::new("Metrics", "/metrics", METRICS_ITEM_ID),
        NavItem::new("Logs", "/logs", "logs"),
    ]
}

/// Externally observed readiness of a gated subsystem.
///
/// An unknown readiness (`None`) counts as not ready.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureGate {
    pub subsystem_ready: Option<bool>,
    pub explicitly_disabled: bool,
}

impl FeatureGate {
    pub fn new(subsystem_ready: Option<bool>, explicitly_disabled: bool) -> Self {
        Self {
            subsystem_ready,
            explicitly_disabled,
        }
    }

    /// Builds the gate from the metrics context flag and Grafana host.
    pub fn from_metrics(context_loaded: Option<bool>, grafana_host: Option<&str>) -> Self {
        Self {
            subsystem_ready: context_loaded,
            explicitly_disabled: grafana_host == Some(GRAFANA_DISABLED),
        }
    }

    pub fn is_open(&self) -> bool {
        !self.explicitly_disabled && self.subsystem_ready == Some(true)
    }
}

/// The static item list plus the gate for its one conditional entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavMenu {
    pub items: Vec<NavItem>,
    pub gated_item: String,
    pub gate: FeatureGate,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self {
            items: default_nav_items(),
            gated_item: METRICS_ITEM_ID.to_string(),
            gate: FeatureGate::default(),
        }
    }
}

impl NavMenu {
    pub fn new(items: Vec<NavItem>, gated_item: impl Into<String>, gate: FeatureGate) -> Self {
        Self {
            items,
            gated_item: gated_item.into(),
            gate,
        }
    }

    /// Items to show, in order, with the gated item dropped while closed.
    pub fn visible_items(&self) -> impl Iterator<Item = &NavItem> + '_ {
        let gate_open = self.gate.is_open();
        self.items
            .iter()
            .filter(move |item| gate_open || item.id != self.gated_item)
    }
}
