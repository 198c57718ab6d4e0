//! Dashboard configuration.
//!
//! Loaded from an optional JSON file; CLI flags are applied on top by the
//! binary.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::PATH_ROOT;
use crate::error::ConfigError;
use crate::nav_items::{default_nav_items, FeatureGate, NavItem, NavMenu, METRICS_ITEM_ID};

/// Main dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Top-level nav destinations, in display order
    pub nav_items: Vec<NavItem>,

    /// Id of the item gated on metrics readiness
    pub gated_item: String,

    /// Metrics subsystem state
    pub metrics: MetricsConfig,

    /// Window title
    pub window_title: String,

    /// Default log level (can be overridden by RUST_LOG)
    pub log_level: String,
}

/// Metrics readiness as reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Whether the metrics context finished loading. Unknown means not ready.
    pub context_loaded: Option<bool>,

    /// Grafana host, or `"DISABLED"` to turn metrics off.
    pub grafana_host: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            nav_items: default_nav_items(),
            gated_item: METRICS_ITEM_ID.to_string(),
            metrics: MetricsConfig::default(),
            window_title: "Dashboard".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks nav item ids are non-empty and unique and paths are absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for item in &self.nav_items {
            if item.id.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "nav item '{}' has an empty id",
                    item.title
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate nav item id '{}'",
                    item.id
                )));
            }
            if !item.path.starts_with(PATH_ROOT) {
                return Err(ConfigError::Invalid(format!(
                    "nav item '{}' path '{}' must be absolute",
                    item.id, item.path
                )));
            }
        }
        Ok(())
    }

    pub fn feature_gate(&self) -> FeatureGate {
        FeatureGate::from_metrics(self.metrics.context_loaded, self.metrics.grafana_host.as_deref())
    }

    pub fn nav_menu(&self) -> NavMenu {
        NavMenu::new(self.nav_items.clone(), self.gated_item.clone(), self.feature_gate())
    }
}
