use dashnav_core::PageDescriptor;
use dashnav_ui::{NavHierarchy, PageInfo};
use dioxus::prelude::*;

use crate::mock_data::{find_node, ACTORS, NODES};

use super::{section_page, EmptyState, ScreenLink};

#[component]
pub fn ClusterLayout(hierarchy: NavHierarchy, children: Element) -> Element {
    rsx! {
        div {
            class: "screen",
            PageInfo { hierarchy, page: section_page("cluster", "Cluster") }
            {children}
        }
    }
}

#[component]
pub fn NodeList(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        h1 { class: "screen-title", "Nodes" }
        ul {
            class: "screen-list",
            for node in NODES.iter() {
                li {
                    ScreenLink {
                        path: format!("/cluster/nodes/{}", node.id),
                        label: node.id.to_string(),
                        on_navigate,
                    }
                    " {node.address}"
                    if node.alive { " ALIVE" } else { " DEAD" }
                }
            }
        }
    }
}

/// Node detail, nested under the cluster section as `nodes/<id>`.
#[component]
pub fn NodeDetail(
    hierarchy: NavHierarchy,
    node_id: String,
    on_navigate: EventHandler<String>,
) -> Element {
    let page = PageDescriptor::new("node", format!("Node {node_id}"))
        .with_path(format!("nodes/{node_id}"));
    let Some(node) = find_node(&node_id) else {
        return rsx! {
            PageInfo { hierarchy, page }
            EmptyState {
                title: format!("Node {node_id}"),
                message: "No node with this id.".to_string(),
            }
        };
    };

    rsx! {
        PageInfo { hierarchy, page }
        h1 { class: "screen-title", "Node {node.id}" }
        ul {
            class: "screen-list",
            li { "Address: {node.address}" }
            li { if node.alive { "State: ALIVE" } else { "State: DEAD" } }
        }
        h3 { "Actors on this node" }
        ul {
            class: "screen-list",
            for actor in ACTORS.iter().filter(|a| a.node_id == node.id) {
                li {
                    ScreenLink {
                        path: format!("/actors/{}", actor.id),
                        label: format!("{} ({})", actor.class_name, actor.id),
                        on_navigate,
                    }
                }
            }
        }
    }
}
