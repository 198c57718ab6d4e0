//! Scoped page registrations.
//!
//! A [`PageRegistration`] is acquired when a screen becomes active and
//! releases its slot when dropped. Drop runs on every exit path: normal
//! navigation, a cancelled setup future, or unwinding out of a panicking
//! render. If the store is mid-borrow when the guard drops, the release is
//! queued and applied as soon as that borrow ends, so observers still see it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::descriptor::PageDescriptor;
use crate::store::{HierarchyObserver, ObserverId, PageHierarchyStore, RegistrationHandle};

#[derive(Default)]
struct Shared {
    store: RefCell<PageHierarchyStore>,
    deferred: RefCell<Vec<RegistrationHandle>>,
}

impl Shared {
    /// Applies queued releases. Leaves the queue alone while the store is
    /// still borrowed; the borrow's owner flushes again once it ends.
    fn flush(&self) {
        if self.deferred.borrow().is_empty() {
            return;
        }
        let Ok(mut store) = self.store.try_borrow_mut() else {
            trace!("store still borrowed, keeping deferred releases queued");
            return;
        };
        let pending = std::mem::take(&mut *self.deferred.borrow_mut());
        for handle in pending {
            store.release(handle);
        }
    }
}

/// Single-threaded shared handle to one shell's hierarchy store.
///
/// Every mutation notifies the store's observers before returning.
#[derive(Clone, Default)]
pub struct SharedHierarchy {
    inner: Rc<Shared>,
}

impl SharedHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `descriptor` and returns a guard that owns the slot.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a [`with_hierarchy`](Self::with_hierarchy)
    /// closure or an observer callback.
    pub fn register(&self, descriptor: PageDescriptor) -> PageRegistration {
        self.inner.flush();
        let handle = self.inner.store.borrow_mut().register(descriptor);
        self.inner.flush();
        PageRegistration {
            shared: Rc::downgrade(&self.inner),
            handle,
        }
    }

    /// Owned copy of the current hierarchy.
    pub fn snapshot(&self) -> Vec<PageDescriptor> {
        self.inner.flush();
        self.inner.store.borrow().snapshot()
    }

    /// Runs `f` against the store for read-only derivations.
    ///
    /// Guards dropped inside `f` are released right after it returns.
    pub fn with_hierarchy<R>(&self, f: impl FnOnce(&[PageDescriptor]) -> R) -> R {
        self.inner.flush();
        let out = f(self.inner.store.borrow().current_hierarchy());
        self.inner.flush();
        out
    }

    /// Number of releases waiting for the store to become free.
    pub fn pending_releases(&self) -> usize {
        self.inner.deferred.borrow().len()
    }

    pub fn subscribe(&self, observer: HierarchyObserver) -> ObserverId {
        self.inner.flush();
        self.inner.store.borrow_mut().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.inner.store.borrow_mut().unsubscribe(id)
    }
}

/// Guard owning one slot in a [`SharedHierarchy`].
#[must_use = "dropping the registration immediately removes the page"]
pub struct PageRegistration {
    shared: Weak<Shared>,
    handle: RegistrationHandle,
}

impl PageRegistration {
    pub fn handle(&self) -> RegistrationHandle {
        self.handle
    }

    /// Replaces this screen's descriptor in place.
    ///
    /// Returns `false` if the slot was taken over by a duplicate id or the
    /// shell has been torn down.
    pub fn update(&self, descriptor: PageDescriptor) -> bool {
        let Some(shared) = self.shared.upgrade() else {
            return false;
        };
        shared.flush();
        let updated = shared.store.borrow_mut().update(self.handle, descriptor);
        shared.flush();
        updated
    }
}

impl Drop for PageRegistration {
    fn drop(&mut self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        match shared.store.try_borrow_mut() {
            Ok(mut store) => {
                store.release(self.handle);
            }
            Err(_) => {
                debug!(handle = self.handle.as_u64(), "store busy, deferring release");
                shared.deferred.borrow_mut().push(self.handle);
            }
        }
    }
}

impl std::fmt::Debug for PageRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistration")
            .field("handle", &self.handle)
            .field("live", &(self.shared.strong_count() > 0))
            .finish()
    }
}
