#![forbid(unsafe_code)]

//! Session-wide slide position.
//!
//! Every controller mounted in one [`Session`] shares a single
//! [`PositionStore`]. The store is created the first time a controller asks
//! for it and lives until the session and every controller holding a handle
//! are dropped.
//!
//! # Invariants
//!
//! 1. A fresh store reads `{ active_vertical: 0, active_horizontal: 0 }`.
//! 2. The store is only written by the controller when a transition
//!    completes, and each write touches exactly one axis field.
//! 3. All handles from one session observe the same position.
//!
//! Handles are `Rc`-based: a session belongs to one UI thread.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

use fullpage_core::geometry::Axis;

/// Active indices on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlidePosition {
    /// Active slide on the vertical axis.
    pub active_vertical: usize,
    /// Active slide on the horizontal axis.
    pub active_horizontal: usize,
}

impl SlidePosition {
    /// Active index along `axis`.
    #[must_use]
    pub const fn active(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.active_vertical,
            Axis::Horizontal => self.active_horizontal,
        }
    }

    /// Copy with the `axis` field replaced.
    #[must_use]
    pub const fn with_active(mut self, axis: Axis, index: usize) -> Self {
        match axis {
            Axis::Vertical => self.active_vertical = index,
            Axis::Horizontal => self.active_horizontal = index,
        }
        self
    }
}

/// Shared handle to a session's [`SlidePosition`].
#[derive(Debug, Clone, Default)]
pub struct PositionStore {
    inner: Rc<Cell<SlidePosition>>,
}

impl PositionStore {
    /// Current position.
    #[must_use]
    pub fn position(&self) -> SlidePosition {
        self.inner.get()
    }

    /// Active index along `axis`.
    #[must_use]
    pub fn active(&self, axis: Axis) -> usize {
        self.inner.get().active(axis)
    }

    /// Record a completed transition on `axis`.
    pub(crate) fn commit(&self, axis: Axis, index: usize) {
        self.inner.set(self.inner.get().with_active(axis, index));
    }

    /// Check whether two handles point at the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// One navigation session (one page lifetime).
#[derive(Debug, Default)]
pub struct Session {
    store: OnceCell<PositionStore>,
}

impl Session {
    /// Create a session with no store yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's store, created at `{0, 0}` on first call.
    #[must_use]
    pub fn store(&self) -> PositionStore {
        self.store.get_or_init(PositionStore::default).clone()
    }

    /// True once a store has been created.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.store.get().is_some()
    }

    /// Current position, if the store exists.
    #[must_use]
    pub fn position(&self) -> Option<SlidePosition> {
        self.store.get().map(PositionStore::position)
    }
}
