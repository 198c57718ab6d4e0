use dashnav_core::PageDescriptor;
use dashnav_ui::{NavHierarchy, PageInfo};
use dioxus::prelude::*;

use crate::mock_data::{find_serve_app, SERVE_APPS};

use super::{section_page, EmptyState, ScreenLink};

#[component]
pub fn ServeLayout(hierarchy: NavHierarchy, children: Element) -> Element {
    rsx! {
        div {
            class: "screen",
            PageInfo { hierarchy, page: section_page("serve", "Serve") }
            {children}
        }
    }
}

#[component]
pub fn ServeAppList(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        h1 { class: "screen-title", "Serve Applications" }
        ul {
            class: "screen-list",
            for app in SERVE_APPS.iter() {
                li {
                    ScreenLink {
                        path: format!("/serve/applications/{}", app.name),
                        label: app.name.to_string(),
                        on_navigate,
                    }
                    " {app.route_prefix}"
                }
            }
        }
    }
}

#[component]
pub fn ServeAppDetail(hierarchy: NavHierarchy, app: String) -> Element {
    let page =
        PageDescriptor::new("serve-app", app.clone()).with_path(format!("applications/{app}"));

    rsx! {
        PageInfo { hierarchy, page }
        {
            match find_serve_app(&app) {
                Some(found) => rsx! {
                    h1 { class: "screen-title", "{found.name}" }
                    ul {
                        class: "screen-list",
                        li { "Route prefix: {found.route_prefix}" }
                        li { "Replicas: {found.replicas}" }
                    }
                },
                None => rsx! {
                    EmptyState {
                        title: app.clone(),
                        message: "No application with this name.".to_string(),
                    }
                },
            }
        }
    }
}
