//! Small building blocks shared by the screens.

use dioxus::prelude::*;

/// In-app link that routes through the shell instead of the webview.
#[component]
pub fn ScreenLink(path: String, label: String, on_navigate: EventHandler<String>) -> Element {
    let target = path.clone();
    rsx! {
        a {
            class: "screen-link",
            href: "{path}",
            onclick: move |evt| {
                evt.prevent_default();
                on_navigate.call(target.clone());
            },
            "{label}"
        }
    }
}

/// Placeholder for screens with nothing to show.
#[component]
pub fn EmptyState(title: String, message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h3 { "{title}" }
            p { "{message}" }
        }
    }
}
