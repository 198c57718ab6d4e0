use dashnav_core::PageDescriptor;
use dashnav_ui::{NavHierarchy, PageInfo};
use dioxus::prelude::*;

use crate::mock_data::{find_actor, ACTORS};

use super::{EmptyState, ScreenLink};

/// Registers the actors section ahead of whichever actor screen is nested.
#[component]
pub fn ActorLayout(hierarchy: NavHierarchy, children: Element) -> Element {
    rsx! {
        div {
            class: "screen",
            PageInfo {
                hierarchy,
                page: PageDescriptor::new("actors", "Actor").with_path("/actors"),
            }
            {children}
        }
    }
}

#[component]
pub fn ActorList(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        h1 { class: "screen-title", "Actors" }
        ul {
            class: "screen-list",
            for actor in ACTORS.iter() {
                li {
                    ScreenLink {
                        path: format!("/actors/{}", actor.id),
                        label: actor.id.to_string(),
                        on_navigate,
                    }
                    " {actor.class_name} on {actor.node_id}"
                }
            }
        }
    }
}

#[component]
pub fn ActorDetail(hierarchy: NavHierarchy, actor_id: String) -> Element {
    let page = PageDescriptor::new("actor", actor_id.clone()).with_path(actor_id.clone());

    rsx! {
        PageInfo { hierarchy, page }
        {
            match find_actor(&actor_id) {
                Some(actor) => rsx! {
                    h1 { class: "screen-title", "{actor.class_name}" }
                    ul {
                        class: "screen-list",
                        li { "Actor ID: {actor.id}" }
                        li { "Node: {actor.node_id}" }
                    }
                },
                None => rsx! {
                    EmptyState {
                        title: actor_id.clone(),
                        message: "No actor with this id.".to_string(),
                    }
                },
            }
        }
    }
}
