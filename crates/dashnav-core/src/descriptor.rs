//! Page descriptors contributed by screens to the navigation hierarchy.

use serde::{Deserialize, Serialize};

/// Marker that distinguishes an absolute path from a relative segment.
pub const PATH_ROOT: char = '/';

/// The data a screen contributes to the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Opaque identifier, unique among registered descriptors.
    pub id: String,
    /// Breadcrumb label for this level.
    pub title: String,
    /// Absolute path, relative segment, or nothing for a label-only level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PageDescriptor {
    /// Creates a label-only descriptor.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: None,
        }
    }

    /// Sets the path (absolute when it starts with `/`, otherwise relative).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Returns how this descriptor contributes to the accumulated path.
    ///
    /// An empty path string counts as no path at all.
    pub fn segment(&self) -> PathSegment<'_> {
        match self.path.as_deref() {
            None | Some("") => PathSegment::None,
            Some(p) if p.starts_with(PATH_ROOT) => PathSegment::Absolute(p),
            Some(p) => PathSegment::Relative(p),
        }
    }
}

/// Classification of a descriptor's path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Replaces the accumulated path.
    Absolute(&'a str),
    /// Appended to the accumulated path with a separator.
    Relative(&'a str),
    /// Label-only level.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_classification() {
        let abs = PageDescriptor::new("jobs", "Jobs").with_path("/jobs");
        let rel = PageDescriptor::new("job", "Job 123").with_path("123");
        let none = PageDescriptor::new("detail", "Detail");
        let empty = PageDescriptor::new("blank", "Blank").with_path("");

        assert_eq!(abs.segment(), PathSegment::Absolute("/jobs"));
        assert_eq!(rel.segment(), PathSegment::Relative("123"));
        assert_eq!(none.segment(), PathSegment::None);
        assert_eq!(empty.segment(), PathSegment::None);
    }

    #[test]
    fn test_deserialize_without_path() {
        let desc: PageDescriptor =
            serde_json::from_str(r#"{"id":"cluster","title":"Cluster"}"#).unwrap();
        assert_eq!(desc, PageDescriptor::new("cluster", "Cluster"));
    }
}
