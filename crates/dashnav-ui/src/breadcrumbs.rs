//! Breadcrumb bar shown under the nav bar when the user is inside a nested
//! screen.

use dashnav_core::Breadcrumb;
use dioxus::prelude::*;

#[component]
pub fn MainNavBreadcrumbs(
    breadcrumbs: Vec<Breadcrumb>,
    on_navigate: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "nav-breadcrumbs",
            for (i, crumb) in breadcrumbs.iter().enumerate() {
                {
                    // The innermost level is styled as the current location,
                    // link or not.
                    let crumb_class = if crumb.current { "crumb current" } else { "crumb" };
                    let href = crumb.resolved_path.clone().unwrap_or_default();
                    let target = crumb.resolved_path.clone();
                    rsx! {
                        if i > 0 {
                            span { class: "crumb crumb-sep", "/" }
                        }
                        if crumb.is_link() {
                            a {
                                class: "{crumb_class} crumb-link",
                                href: "{href}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    if let Some(path) = &target {
                                        on_navigate.call(path.clone());
                                    }
                                },
                                "{crumb.label}"
                            }
                        } else {
                            span { class: "{crumb_class}", "{crumb.label}" }
                        }
                    }
                }
            }
        }
    }
}
