//! Ordered store of the page descriptors currently mounted in the shell.
//!
//! Screens append their descriptor when they become active and release it
//! when they leave the view tree. Every slot is owned by exactly one
//! [`RegistrationHandle`], and removal always goes through that handle, so a
//! screen can never remove a sibling's entry even when titles collide or
//! unmounts arrive out of order.
//!
//! Observers are invoked synchronously after each mutation with the complete
//! sequence, so no observer ever sees a half-applied change.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::descriptor::PageDescriptor;

/// Capability to release (or replace) one slot in the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegistrationHandle(u64);

impl RegistrationHandle {
    /// Raw numeric value, mostly for logging.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Identifier returned by [`PageHierarchyStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Callback invoked with the full hierarchy after every mutation.
pub type HierarchyObserver = Box<dyn FnMut(&[PageDescriptor])>;

/// The hierarchy of currently registered pages, outermost first.
#[derive(Default)]
pub struct PageHierarchyStore {
    // Parallel vectors: owners[i] owns pages[i].
    owners: Vec<RegistrationHandle>,
    pages: Vec<PageDescriptor>,
    next_handle: u64,
    next_observer: u64,
    revision: u64,
    observers: Vec<(ObserverId, HierarchyObserver)>,
}

impl fmt::Debug for PageHierarchyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageHierarchyStore")
            .field("pages", &self.pages)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PageHierarchyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor and returns the handle that owns its slot.
    ///
    /// If another active slot already carries the same id, the new
    /// descriptor takes that slot over in place and the previous owner's
    /// handle becomes stale.
    pub fn register(&mut self, descriptor: PageDescriptor) -> RegistrationHandle {
        let handle = RegistrationHandle(self.next_handle);
        self.next_handle += 1;

        match self.index_of_id(&descriptor.id) {
            Some(index) => {
                warn!(
                    page_id = %descriptor.id,
                    previous = self.owners[index].0,
                    handle = handle.0,
                    "duplicate page id registered, replacing existing slot"
                );
                self.owners[index] = handle;
                self.pages[index] = descriptor;
            }
            None => {
                debug!(
                    page_id = %descriptor.id,
                    handle = handle.0,
                    depth = self.pages.len(),
                    "page registered"
                );
                self.owners.push(handle);
                self.pages.push(descriptor);
            }
        }

        self.commit();
        handle
    }

    /// Replaces the descriptor owned by `handle` without moving its slot.
    ///
    /// Returns `false` when the handle no longer owns a slot.
    pub fn update(&mut self, handle: RegistrationHandle, descriptor: PageDescriptor) -> bool {
        let Some(mut index) = self.index_of_handle(handle) else {
            warn!(
                handle = handle.0,
                page_id = %descriptor.id,
                "update on stale registration ignored"
            );
            return false;
        };

        if self.pages[index] == descriptor {
            return true;
        }

        if let Some(conflict) = self
            .pages
            .iter()
            .enumerate()
            .position(|(i, p)| i != index && p.id == descriptor.id)
        {
            warn!(
                page_id = %descriptor.id,
                evicted = self.owners[conflict].0,
                "page id collision on update, evicting other slot"
            );
            self.owners.remove(conflict);
            self.pages.remove(conflict);
            if conflict < index {
                index -= 1;
            }
        }

        debug!(page_id = %descriptor.id, handle = handle.0, "page updated in place");
        self.pages[index] = descriptor;
        self.commit();
        true
    }

    /// Removes the slot owned by `handle`, wherever it currently sits.
    ///
    /// Releasing an unknown or already released handle is a no-op and
    /// returns `false`.
    pub fn release(&mut self, handle: RegistrationHandle) -> bool {
        let Some(index) = self.index_of_handle(handle) else {
            trace!(handle = handle.0, "release of inactive registration ignored");
            return false;
        };

        self.owners.remove(index);
        let page = self.pages.remove(index);
        debug!(page_id = %page.id, handle = handle.0, position = index, "page released");

        self.commit();
        true
    }

    /// The current hierarchy, outermost first.
    pub fn current_hierarchy(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// An owned copy of the current hierarchy.
    pub fn snapshot(&self) -> Vec<PageDescriptor> {
        self.pages.clone()
    }

    /// Whether `handle` still owns a slot.
    pub fn is_active(&self, handle: RegistrationHandle) -> bool {
        self.index_of_handle(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Monotonic counter bumped on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers an observer. It is called immediately with the current
    /// hierarchy and then after every mutation.
    pub fn subscribe(&mut self, mut observer: HierarchyObserver) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        observer(&self.pages);
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn commit(&mut self) {
        self.revision += 1;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.pages);
        }
    }

    fn index_of_handle(&self, handle: RegistrationHandle) -> Option<usize> {
        self.owners.iter().position(|h| *h == handle)
    }

    fn index_of_id(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }
}
