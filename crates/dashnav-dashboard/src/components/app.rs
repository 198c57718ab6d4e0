//! Root component: owns the page hierarchy and routes screens into the shell.

use dashnav_core::{DashboardConfig, PageDescriptor};
use dashnav_ui::{use_nav_hierarchy, NavHierarchy, NavShell};
use dioxus::prelude::*;

use crate::router::Route;

use super::{
    ActorDetail, ActorLayout, ActorList, ClusterLayout, EmptyState, JobDetail, JobList, JobsLayout,
    LogFileView, LogsLayout, LogsIndex, MetricsPage, NodeDetail, NodeList, OverviewPage,
    ServeAppDetail, ServeAppList, ServeLayout,
};

/// Root application component.
#[component]
pub fn App(config: DashboardConfig) -> Element {
    let hierarchy = use_nav_hierarchy();
    let mut route = use_signal(|| Route::Overview);
    let menu = config.nav_menu();

    let navigate = move |path: String| {
        let next = Route::parse(&path);
        tracing::debug!(path = %path, route = ?next, "navigate");
        route.set(next);
    };

    rsx! {
        NavShell {
            hierarchy,
            menu,
            on_navigate: navigate,
            Outlet { hierarchy, route: route(), on_navigate: navigate }
        }
    }
}

/// Renders the screen tree for the current route.
#[component]
fn Outlet(hierarchy: NavHierarchy, route: Route, on_navigate: EventHandler<String>) -> Element {
    match route {
        Route::Overview => rsx! { OverviewPage { hierarchy, on_navigate } },
        Route::Jobs => rsx! {
            JobsLayout { hierarchy, JobList { on_navigate } }
        },
        Route::Job { job_id } => rsx! {
            JobsLayout { hierarchy, JobDetail { hierarchy, job_id } }
        },
        Route::Serve => rsx! {
            ServeLayout { hierarchy, ServeAppList { on_navigate } }
        },
        Route::ServeApp { app } => rsx! {
            ServeLayout { hierarchy, ServeAppDetail { hierarchy, app } }
        },
        Route::Cluster => rsx! {
            ClusterLayout { hierarchy, NodeList { on_navigate } }
        },
        Route::Node { node_id } => rsx! {
            ClusterLayout { hierarchy, NodeDetail { hierarchy, node_id, on_navigate } }
        },
        Route::Actors => rsx! {
            ActorLayout { hierarchy, ActorList { on_navigate } }
        },
        Route::Actor { actor_id } => rsx! {
            ActorLayout { hierarchy, ActorDetail { hierarchy, actor_id } }
        },
        Route::Metrics => rsx! { MetricsPage { hierarchy } },
        Route::Logs => rsx! {
            LogsLayout { hierarchy, LogsIndex { on_navigate } }
        },
        Route::LogFile { node_id, file } => rsx! {
            LogsLayout { hierarchy, LogFileView { hierarchy, node_id, file } }
        },
        Route::NotFound { path } => rsx! {
            EmptyState {
                title: "Page not found".to_string(),
                message: format!("Nothing lives at {path}."),
            }
        },
    }
}

/// Descriptor for a top-level section, registered by its layout.
pub fn section_page(id: &str, title: &str) -> PageDescriptor {
    PageDescriptor::new(id, title).with_path(format!("/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashnav_core::PathSegment;

    #[test]
    fn test_section_page_is_absolute() {
        let page = section_page("jobs", "Jobs");
        assert_eq!(page.segment(), PathSegment::Absolute("/jobs"));
        assert_eq!(Route::parse(page.path.as_deref().unwrap()), Route::Jobs);
    }
}
