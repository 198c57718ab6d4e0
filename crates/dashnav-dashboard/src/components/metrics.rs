use dashnav_ui::{NavHierarchy, PageInfo};
use dioxus::prelude::*;

use super::{section_page, EmptyState};

/// Metrics screen. Reachable by path even while its nav item is hidden.
#[component]
pub fn MetricsPage(hierarchy: NavHierarchy) -> Element {
    rsx! {
        div {
            class: "screen",
            PageInfo { hierarchy, page: section_page("metrics", "Metrics") }
            h1 { class: "screen-title", "Metrics" }
            EmptyState {
                title: "No dashboards".to_string(),
                message: "Metrics panels appear here once Grafana is reachable.".to_string(),
            }
        }
    }
}
