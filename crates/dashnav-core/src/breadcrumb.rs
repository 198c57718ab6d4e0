//! Breadcrumb trail derivation.

use serde::Serialize;

use crate::descriptor::{PageDescriptor, PathSegment, PATH_ROOT};

/// One rendered level of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Key for the rendering layer, taken from the descriptor id.
    pub id: String,
    pub label: String,
    /// Absolute link target, or `None` for a plain-text level.
    pub resolved_path: Option<String>,
    /// Set on the innermost level only.
    pub current: bool,
}

impl Breadcrumb {
    /// Whether this level should render as a link.
    pub fn is_link(&self) -> bool {
        self.resolved_path.is_some()
    }
}

/// Derives the breadcrumb trail from the hierarchy.
///
/// Absolute paths reset the accumulated path, relative segments are joined
/// onto it with `/`, and levels without a path leave it untouched and get no
/// link. A hierarchy with one entry or none yields an empty trail.
pub fn derive_breadcrumbs(hierarchy: &[PageDescriptor]) -> Vec<Breadcrumb> {
    if hierarchy.len() <= 1 {
        return Vec::new();
    }

    let last = hierarchy.len() - 1;
    let mut current_path = String::new();

    hierarchy
        .iter()
        .enumerate()
        .map(|(index, page)| {
            let resolved_path = match page.segment() {
                PathSegment::Absolute(path) => {
                    current_path.clear();
                    current_path.push_str(path);
                    Some(current_path.clone())
                }
                PathSegment::Relative(segment) => {
                    current_path.push(PATH_ROOT);
                    current_path.push_str(segment);
                    Some(current_path.clone())
                }
                PathSegment::None => None,
            };

            Breadcrumb {
                id: page.id.clone(),
                label: page.title.clone(),
                resolved_path,
                current: index == last,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs(trail: &[Breadcrumb]) -> Vec<(&str, Option<&str>)> {
        trail
            .iter()
            .map(|c| (c.label.as_str(), c.resolved_path.as_deref()))
            .collect()
    }

    #[test]
    fn test_empty_and_single_yield_nothing() {
        assert!(derive_breadcrumbs(&[]).is_empty());
        let single = [PageDescriptor::new("jobs", "Jobs").with_path("/jobs")];
        assert!(derive_breadcrumbs(&single).is_empty());
    }

    #[test]
    fn test_relative_segment_joins_parent() {
        let hierarchy = [
            PageDescriptor::new("a", "Jobs").with_path("/jobs"),
            PageDescriptor::new("b", "Job 123").with_path("123"),
        ];
        let trail = derive_breadcrumbs(&hierarchy);

        assert_eq!(
            crumbs(&trail),
            vec![("Jobs", Some("/jobs")), ("Job 123", Some("/jobs/123"))]
        );
        assert!(!trail[0].current);
        assert!(trail[1].current);
    }

    #[test]
    fn test_missing_path_is_plain_text() {
        let hierarchy = [
            PageDescriptor::new("a", "Jobs").with_path("/jobs"),
            PageDescriptor::new("b", "Detail"),
        ];
        let trail = derive_breadcrumbs(&hierarchy);

        assert_eq!(crumbs(&trail), vec![("Jobs", Some("/jobs")), ("Detail", None)]);
        assert!(!trail[1].is_link());
    }

    #[test]
    fn test_pathless_level_does_not_reset_accumulation() {
        let hierarchy = [
            PageDescriptor::new("cluster", "Cluster").with_path("/cluster"),
            PageDescriptor::new("group", "Nodes"),
            PageDescriptor::new("node", "node-1").with_path("nodes/node-1"),
        ];

        assert_eq!(
            crumbs(&derive_breadcrumbs(&hierarchy)),
            vec![
                ("Cluster", Some("/cluster")),
                ("Nodes", None),
                ("node-1", Some("/cluster/nodes/node-1")),
            ]
        );
    }

    #[test]
    fn test_absolute_path_resets_accumulation() {
        let hierarchy = [
            PageDescriptor::new("serve", "Serve").with_path("/serve"),
            PageDescriptor::new("app", "App").with_path("applications/app"),
            PageDescriptor::new("logs", "Logs").with_path("/logs/app"),
            PageDescriptor::new("file", "stdout").with_path("stdout"),
        ];

        assert_eq!(
            crumbs(&derive_breadcrumbs(&hierarchy)),
            vec![
                ("Serve", Some("/serve")),
                ("App", Some("/serve/applications/app")),
                ("Logs", Some("/logs/app")),
                ("stdout", Some("/logs/app/stdout")),
            ]
        );
    }

    #[test]
    fn test_relative_first_entry_starts_from_root() {
        let hierarchy = [
            PageDescriptor::new("a", "A").with_path("a"),
            PageDescriptor::new("b", "B").with_path("b"),
        ];

        assert_eq!(
            crumbs(&derive_breadcrumbs(&hierarchy)),
            vec![("A", Some("/a")), ("B", Some("/a/b"))]
        );
    }
}
