use dashnav_core::PageDescriptor;
use dashnav_ui::{NavHierarchy, PageInfo};
use dioxus::prelude::*;

use crate::mock_data::{find_job, JOBS};

use super::{section_page, EmptyState, ScreenLink};

/// Registers the Jobs section and hosts its nested screens.
#[component]
pub fn JobsLayout(hierarchy: NavHierarchy, children: Element) -> Element {
    rsx! {
        div {
            class: "screen",
            PageInfo { hierarchy, page: section_page("jobs", "Jobs") }
            {children}
        }
    }
}

#[component]
pub fn JobList(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        h1 { class: "screen-title", "Jobs" }
        ul {
            class: "screen-list",
            for job in JOBS.iter() {
                li {
                    ScreenLink {
                        path: format!("/jobs/{}", job.id),
                        label: format!("Job {}", job.id),
                        on_navigate,
                    }
                    " {job.entrypoint} ({job.status})"
                }
            }
        }
    }
}

/// A single job. Registers a relative segment under the Jobs section.
#[component]
pub fn JobDetail(hierarchy: NavHierarchy, job_id: String) -> Element {
    let page = PageDescriptor::new("job", format!("Job {job_id}")).with_path(job_id.clone());

    rsx! {
        PageInfo { hierarchy, page }
        {
            match find_job(&job_id) {
                Some(job) => rsx! {
                    h1 { class: "screen-title", "Job {job.id}" }
                    ul {
                        class: "screen-list",
                        li { "Entrypoint: {job.entrypoint}" }
                        li { "Status: {job.status}" }
                    }
                },
                None => rsx! {
                    EmptyState {
                        title: format!("Job {job_id}"),
                        message: "No job with this id.".to_string(),
                    }
                },
            }
        }
    }
}
