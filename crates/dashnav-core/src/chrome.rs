//! Render model for the navigation chrome: nav bar entries with their
//! highlight state, the breadcrumb trail, and the content offset the shell
//! needs to clear the fixed header.

use crate::active::active_section;
use crate::breadcrumb::{derive_breadcrumbs, Breadcrumb};
use crate::descriptor::PageDescriptor;
use crate::nav_items::{NavItem, NavMenu};

/// Height of the top nav bar in pixels.
pub const MAIN_NAV_HEIGHT: u32 = 56;

/// Height of the breadcrumb bar in pixels.
pub const BREADCRUMBS_HEIGHT: u32 = 36;

/// Gap between the nav bar and the breadcrumb bar, in pixels.
const BREADCRUMBS_GAP: u32 = 2;

/// A nav bar entry as it should be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItemView {
    pub item: NavItem,
    pub highlighted: bool,
}

/// Everything the shell needs to draw the chrome for one hierarchy state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavChrome {
    pub items: Vec<NavItemView>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl NavChrome {
    /// Recomputes the chrome from the current hierarchy.
    pub fn derive(menu: &NavMenu, hierarchy: &[PageDescriptor]) -> Self {
        let active = active_section(hierarchy);
        let items = menu
            .visible_items()
            .map(|item| NavItemView {
                highlighted: active == Some(item.id.as_str()),
                item: item.clone(),
            })
            .collect();

        Self {
            items,
            breadcrumbs: derive_breadcrumbs(hierarchy),
        }
    }

    /// Whether the breadcrumb bar is shown under the nav bar.
    pub fn tall_nav(&self) -> bool {
        !self.breadcrumbs.is_empty()
    }

    /// Top padding for the content area.
    pub fn content_offset(&self) -> u32 {
        if self.tall_nav() {
            MAIN_NAV_HEIGHT + BREADCRUMBS_HEIGHT + BREADCRUMBS_GAP
        } else {
            MAIN_NAV_HEIGHT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav_items::FeatureGate;

    #[test]
    fn test_empty_hierarchy_still_renders_nav_bar() {
        let chrome = NavChrome::derive(&NavMenu::default(), &[]);

        assert_eq!(chrome.items.len(), 6);
        assert!(chrome.items.iter().all(|i| !i.highlighted));
        assert!(chrome.breadcrumbs.is_empty());
        assert_eq!(chrome.content_offset(), MAIN_NAV_HEIGHT);
    }

    #[test]
    fn test_highlight_is_exact_match() {
        let hierarchy = [PageDescriptor::new("job", "Job").with_path("/jobs/1")];
        let chrome = NavChrome::derive(&NavMenu::default(), &hierarchy);

        // "job" is a prefix of "jobs" but must not highlight it.
        assert!(chrome.items.iter().all(|i| !i.highlighted));
    }

    #[test]
    fn test_nested_hierarchy_shows_trail() {
        let menu = NavMenu {
            gate: FeatureGate::new(Some(true), false),
            ..NavMenu::default()
        };
        let hierarchy = [
            PageDescriptor::new("cluster", "Cluster").with_path("/cluster"),
            PageDescriptor::new("node1", "node1").with_path("nodes/node1"),
        ];
        let chrome = NavChrome::derive(&menu, &hierarchy);

        let highlighted: Vec<&str> = chrome
            .items
            .iter()
            .filter(|i| i.highlighted)
            .map(|i| i.item.id.as_str())
            .collect();
        assert_eq!(highlighted, vec!["cluster"]);
        assert_eq!(chrome.breadcrumbs.len(), 2);
        assert!(chrome.tall_nav());
        assert_eq!(chrome.content_offset(), 94);
    }

    #[test]
    fn test_active_section_for_hidden_item_highlights_nothing() {
        let hierarchy = [
            PageDescriptor::new("metrics", "Metrics").with_path("/metrics"),
            PageDescriptor::new("panel", "Panel"),
        ];
        let chrome = NavChrome::derive(&NavMenu::default(), &hierarchy);

        assert!(chrome.items.iter().all(|i| !i.highlighted));
        assert_eq!(chrome.breadcrumbs.len(), 2);
    }
}
