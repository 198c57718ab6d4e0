use dashnav_ui::{NavHierarchy, PageInfo};
use dioxus::prelude::*;

use crate::mock_data::{ACTORS, JOBS, NODES};

use super::{section_page, ScreenLink};

/// Cluster-at-a-glance landing screen.
#[component]
pub fn OverviewPage(hierarchy: NavHierarchy, on_navigate: EventHandler<String>) -> Element {
    let alive = NODES.iter().filter(|n| n.alive).count();
    let running = JOBS.iter().filter(|j| j.status == "RUNNING").count();

    rsx! {
        div {
            class: "screen",
            PageInfo { hierarchy, page: section_page("overview", "Overview") }
            h1 { class: "screen-title", "Overview" }
            ul {
                class: "screen-list",
                li {
                    "Nodes: {alive} alive of {NODES.len()} ",
                    ScreenLink { path: "/cluster".to_string(), label: "view".to_string(), on_navigate }
                }
                li {
                    "Jobs: {running} running of {JOBS.len()} ",
                    ScreenLink { path: "/jobs".to_string(), label: "view".to_string(), on_navigate }
                }
                li {
                    "Actors: {ACTORS.len()} ",
                    ScreenLink { path: "/actors".to_string(), label: "view".to_string(), on_navigate }
                }
            }
        }
    }
}
