//! Active top-level section resolution.

use crate::descriptor::PageDescriptor;

/// Id of the outermost registered page, which names the nav item to
/// highlight. `None` when nothing is registered.
pub fn active_section(hierarchy: &[PageDescriptor]) -> Option<&str> {
    hierarchy.first().map(|page| page.id.as_str())
}
