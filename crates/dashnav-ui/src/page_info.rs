//! Page hierarchy handle and the registration hook nested screens use to
//! place themselves in the breadcrumb trail.

use std::cell::RefCell;
use std::rc::Rc;

use dashnav_core::{PageDescriptor, PageRegistration, SharedHierarchy};
use dioxus::prelude::*;
use dioxus::signals::BorrowMutError;
use tracing::{trace, warn};

/// Explicit handle to one shell's page hierarchy.
///
/// Created once by the composition root with [`use_nav_hierarchy`] and passed
/// down as a prop to the shell and to every screen that registers a page.
#[derive(Clone, Copy, PartialEq)]
pub struct NavHierarchy {
    shared: CopyValue<SharedHierarchy>,
    revision: Signal<u64>,
}

impl NavHierarchy {
    fn shared(&self) -> Option<SharedHierarchy> {
        self.shared.try_peek().ok().map(|shared| SharedHierarchy::clone(&shared))
    }

    /// Runs `f` over the current hierarchy, subscribing the calling
    /// component to changes.
    pub fn with<R>(&self, f: impl FnOnce(&[PageDescriptor]) -> R) -> R {
        let _ = self.revision.read();
        match self.shared() {
            Some(shared) => shared.with_hierarchy(f),
            None => f(&[]),
        }
    }

    pub fn snapshot(&self) -> Vec<PageDescriptor> {
        self.shared().map(|shared| shared.snapshot()).unwrap_or_default()
    }

    /// Registers `page`. `None` once the shell has been torn down.
    pub fn register(&self, page: PageDescriptor) -> Option<PageRegistration> {
        self.shared().map(|shared| shared.register(page))
    }
}

/// Creates the hierarchy store for a shell instance.
pub fn use_nav_hierarchy() -> NavHierarchy {
    let revision = use_signal(|| 0u64);
    let shared = use_hook(|| {
        let shared = SharedHierarchy::new();
        let mut revision = revision;
        // The first call comes from `subscribe` itself, during render.
        let mut primed = false;
        shared.subscribe(Box::new(move |pages| {
            trace!(
                depth = pages.len(),
                innermost = pages.last().map(|p| p.id.as_str()).unwrap_or(""),
                "page hierarchy changed"
            );
            if !std::mem::replace(&mut primed, true) {
                return;
            }
            match revision.try_write() {
                Ok(mut rev) => *rev += 1,
                Err(BorrowMutError::Dropped(_)) => {}
                Err(err) => warn!(error = %err, "hierarchy change not propagated to the shell"),
            }
        }));
        CopyValue::new(shared)
    });
    NavHierarchy { shared, revision }
}

/// Registers `page` while the calling component is mounted.
///
/// A changed descriptor replaces the existing slot in place; unmounting
/// drops the registration, which releases it.
pub fn use_page_info(hierarchy: NavHierarchy, page: ReadSignal<PageDescriptor>) {
    let slot = use_hook(|| Rc::new(RefCell::new(None::<PageRegistration>)));

    let effect_slot = slot.clone();
    use_effect(move || {
        let page = page.read().clone();
        let mut slot = effect_slot.borrow_mut();
        if let Some(registration) = slot.as_ref() {
            if registration.update(page.clone()) {
                return;
            }
        }
        // Displaced by a duplicate id; take a fresh slot.
        *slot = hierarchy.register(page);
    });

    use_drop(move || {
        let registration = slot.borrow_mut().take();
        drop(registration);
    });
}

/// Declares the enclosing screen's place in the page hierarchy.
///
/// Put it first among a layout's children so the layout registers before
/// anything nested inside it.
#[component]
pub fn PageInfo(hierarchy: NavHierarchy, page: ReadSignal<PageDescriptor>) -> Element {
    use_page_info(hierarchy, page);
    rsx! {}
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;

    #[derive(Clone)]
    struct Harness {
        hierarchy: Rc<Cell<Option<NavHierarchy>>>,
        mounted: Rc<Cell<bool>>,
        job: Rc<RefCell<String>>,
    }

    impl Harness {
        fn new(job: &str) -> Self {
            Self {
                hierarchy: Rc::new(Cell::new(None)),
                mounted: Rc::new(Cell::new(true)),
                job: Rc::new(RefCell::new(job.to_string())),
            }
        }
    }

    fn harness(props: Harness) -> Element {
        let hierarchy = use_nav_hierarchy();
        props.hierarchy.set(Some(hierarchy));
        let job = props.job.borrow().clone();

        rsx! {
            if props.mounted.get() {
                JobsSection { hierarchy, job }
            }
        }
    }

    #[component]
    fn JobsSection(hierarchy: NavHierarchy, job: String) -> Element {
        let jobs = PageDescriptor::new("jobs", "Jobs").with_path("/jobs");
        let detail = PageDescriptor::new("job", format!("Job {job}")).with_path(job.clone());
        rsx! {
            PageInfo { hierarchy, page: jobs }
            PageInfo { hierarchy, page: detail }
        }
    }

    fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            dom.process_events();
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn entries(dom: &VirtualDom, props: &Harness) -> Vec<String> {
        let hierarchy = props.hierarchy.get().expect("harness rendered");
        dom.in_runtime(|| hierarchy.snapshot())
            .into_iter()
            .map(|p| format!("{}:{}", p.id, p.title))
            .collect()
    }

    #[test]
    fn test_mount_update_unmount() {
        let props = Harness::new("123");
        let mut dom = VirtualDom::new_with_props(harness, props.clone());
        dom.rebuild_in_place();
        settle(&mut dom);
        assert_eq!(entries(&dom, &props), vec!["jobs:Jobs", "job:Job 123"]);

        *props.job.borrow_mut() = "456".to_string();
        dom.mark_dirty(ScopeId::APP);
        settle(&mut dom);
        assert_eq!(entries(&dom, &props), vec!["jobs:Jobs", "job:Job 456"]);

        props.mounted.set(false);
        dom.mark_dirty(ScopeId::APP);
        settle(&mut dom);
        assert!(entries(&dom, &props).is_empty());
    }

    #[test]
    fn test_shell_teardown_with_pages_mounted() {
        let props = Harness::new("7");
        let mut dom = VirtualDom::new_with_props(harness, props.clone());
        dom.rebuild_in_place();
        settle(&mut dom);
        assert_eq!(entries(&dom, &props).len(), 2);

        drop(dom);
    }
}
