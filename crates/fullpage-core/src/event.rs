#![forbid(unsafe_code)]

//! Normalized gesture events.
//!
//! A gesture source turns raw wheel and touch input into [`GestureEvent`]s.
//! The controller only ever sees these values, never the raw input.
//!
//! # Design
//!
//! - `direction` is the [`Axis`] the gesture travelled along.
//! - `intent` says whether the user asked for the next or the previous slide.
//! - `pending` is true once the source has conclusively resolved the
//!   gesture. Interim or ambiguous signals carry `pending == false` and are
//!   ignored by the controller.
//! - `path` is optional; when absent the controller builds one from `origin`.

use crate::geometry::Axis;
use crate::tree::{NodeId, PathEntry};

/// Requested direction of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Next slide (scroll down / swipe left).
    Forward,
    /// Previous slide (scroll up / swipe right).
    Backward,
}

impl Intent {
    /// Signed index step for this intent.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// True for [`Intent::Forward`].
    #[inline]
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

impl From<bool> for Intent {
    fn from(forward: bool) -> Self {
        if forward {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Which source callback slot produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureKind {
    /// Coarse wheel/trackpad scroll.
    #[default]
    Scroll,
    /// Touch swipe.
    Touch,
}

/// A normalized directional gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureEvent {
    /// Axis the gesture travelled along.
    pub direction: Axis,
    /// Forward or backward.
    pub intent: Intent,
    /// True once the gesture is conclusively resolved.
    pub pending: bool,
    /// Node the gesture started on.
    pub origin: NodeId,
    /// Precomputed ancestry of `origin`, innermost first.
    pub path: Option<Vec<PathEntry>>,
    /// Source callback slot.
    pub kind: GestureKind,
}

impl GestureEvent {
    /// A resolved scroll gesture with no precomputed path.
    #[must_use]
    pub fn new(direction: Axis, intent: impl Into<Intent>, origin: NodeId) -> Self {
        Self {
            direction,
            intent: intent.into(),
            pending: true,
            origin,
            path: None,
            kind: GestureKind::Scroll,
        }
    }

    /// Resolved vertical gesture.
    #[must_use]
    pub fn vertical(intent: impl Into<Intent>, origin: NodeId) -> Self {
        Self::new(Axis::Vertical, intent, origin)
    }

    /// Resolved horizontal gesture.
    #[must_use]
    pub fn horizontal(intent: impl Into<Intent>, origin: NodeId) -> Self {
        Self::new(Axis::Horizontal, intent, origin)
    }

    /// Set the pending flag (builder pattern).
    #[must_use]
    pub fn with_pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    /// Attach a precomputed ancestry path (builder pattern).
    #[must_use]
    pub fn with_path(mut self, path: Vec<PathEntry>) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the source slot (builder pattern).
    #[must_use]
    pub fn with_kind(mut self, kind: GestureKind) -> Self {
        self.kind = kind;
        self
    }
}
