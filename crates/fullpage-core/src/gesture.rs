#![forbid(unsafe_code)]

//! Gesture source seam.
//!
//! Recognition itself (wheel deltas, touch tracking, intent resolution) lives
//! in the host. The controller only needs two things from it: a way to hand
//! it resolved [`GestureEvent`](crate::event::GestureEvent)s, described by a
//! [`GestureBinding`], and a way to re-arm it after a transition ends, which
//! is [`GestureSource::listen`].

use crate::event::GestureKind;
use crate::tree::NodeId;

/// A host-side producer of normalized gestures.
pub trait GestureSource {
    /// Re-arm the source after the consumer unlocks.
    ///
    /// Sources that suppress tracking while a gesture is being consumed use
    /// this to start tracking again.
    fn listen(&mut self);
}

impl<S: GestureSource + ?Sized> GestureSource for &mut S {
    fn listen(&mut self) {
        (**self).listen();
    }
}

impl<S: GestureSource + ?Sized> GestureSource for Box<S> {
    fn listen(&mut self) {
        (**self).listen();
    }
}

/// What a host needs to wire a gesture recognizer to a controller.
///
/// `target` is the scope the recognizer should observe. Events produced by
/// the scroll slot go to the controller's `on_scroll`, events from the touch
/// slot go to `on_touch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureBinding {
    /// Scope to observe.
    pub target: NodeId,
    /// Callback slots the controller accepts.
    pub slots: [GestureKind; 2],
}

impl GestureBinding {
    /// Binding on `target` with both the scroll and the touch slot.
    #[must_use]
    pub const fn new(target: NodeId) -> Self {
        Self {
            target,
            slots: [GestureKind::Scroll, GestureKind::Touch],
        }
    }

    /// Check whether the binding accepts events from `kind`.
    #[must_use]
    pub fn accepts(&self, kind: GestureKind) -> bool {
        self.slots.contains(&kind)
    }
}

/// A gesture source that only records re-arm requests.
///
/// Useful for hosts that feed events straight into the controller and for
/// deterministic tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenCounter {
    count: u64,
}

impl ListenCounter {
    /// Create a counter at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Number of times [`GestureSource::listen`] was called.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }
}

impl GestureSource for ListenCounter {
    fn listen(&mut self) {
        self.count += 1;
    }
}
