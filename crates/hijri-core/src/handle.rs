//! `RelinkableHandle<T>`: a shared slot whose value can be swapped
//! atomically at runtime.
//!
//! Readers take an `Arc<T>` snapshot with [`RelinkableHandle::current`] and
//! keep using it for as long as they like; a concurrent
//! [`RelinkableHandle::link_to`] only affects later snapshots.  A reader can
//! therefore never observe a half-replaced value.

use std::sync::{Arc, PoisonError, RwLock};

/// A shared handle whose contained value can be relinked at runtime.
///
/// Cloning the handle shares the slot: relinking through one clone is
/// visible to every other clone.
pub struct RelinkableHandle<T> {
    inner: Arc<RwLock<Option<Arc<T>>>>,
}

impl<T> Clone for RelinkableHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> RelinkableHandle<T> {
    /// Create a new relinkable handle, initially null.
    pub fn null() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a new relinkable handle wrapping `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(value)))),
        }
    }

    /// Replace the contained value with `value`.
    pub fn link_to(&self, value: T) {
        self.link_to_arc(Arc::new(value));
    }

    /// Replace the contained value with an existing `Arc`.
    pub fn link_to_arc(&self, arc: Arc<T>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(arc);
    }

    /// Detach the handle from any value (make it null).
    pub fn unlink(&self) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Return `true` if the handle currently contains no value.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Obtain a snapshot `Arc<T>` of the current value.
    ///
    /// Returns `None` if the handle is null.
    pub fn current(&self) -> Option<Arc<T>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T> Default for RelinkableHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RelinkableHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.current() {
            Some(v) => write!(f, "RelinkableHandle({v:?})"),
            None => write!(f, "RelinkableHandle(null)"),
        }
    }
}
