use dashnav_core::PageDescriptor;
use dashnav_ui::{NavHierarchy, PageInfo};
use dioxus::prelude::*;

use crate::mock_data::{LOG_FILES, NODES};

use super::{section_page, ScreenLink};

#[component]
pub fn LogsLayout(hierarchy: NavHierarchy, children: Element) -> Element {
    rsx! {
        div {
            class: "screen",
            PageInfo { hierarchy, page: section_page("logs", "Logs") }
            {children}
        }
    }
}

#[component]
pub fn LogsIndex(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        h1 { class: "screen-title", "Logs" }
        for node in NODES.iter() {
            h3 { "{node.id}" }
            ul {
                class: "screen-list",
                for file in LOG_FILES.iter() {
                    li {
                        ScreenLink {
                            path: format!("/logs/{}/{}", node.id, file),
                            label: file.to_string(),
                            on_navigate,
                        }
                    }
                }
            }
        }
    }
}

/// One log file. The node level is a plain label; the file level carries an
/// absolute path of its own.
#[component]
pub fn LogFileView(hierarchy: NavHierarchy, node_id: String, file: String) -> Element {
    let node_page = PageDescriptor::new("log-node", format!("Node {node_id}"));
    let file_page =
        PageDescriptor::new("log-file", file.clone()).with_path(format!("/logs/{node_id}/{file}"));

    rsx! {
        PageInfo { hierarchy, page: node_page }
        PageInfo { hierarchy, page: file_page }
        h1 { class: "screen-title", "{file}" }
        pre { class: "log-view", "Streaming {file} from {node_id}..." }
    }
}
