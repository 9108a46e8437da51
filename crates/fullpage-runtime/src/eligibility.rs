#![forbid(unsafe_code)]

//! Horizontal eligibility along a gesture's ancestry.
//!
//! A horizontal gesture only navigates when it started inside a horizontal
//! slider, that is when some node between the origin and the root carries
//! [`Capabilities::HORIZONTAL_SLIDER`]. The check is stateless.

use std::borrow::Cow;

use fullpage_core::event::GestureEvent;
use fullpage_core::tree::{Capabilities, PathEntry, VisualTree};

/// The event's ancestry: its precomputed path, or one built from `origin`.
#[must_use]
pub fn ancestry<'a>(tree: &VisualTree, event: &'a GestureEvent) -> Cow<'a, [PathEntry]> {
    match &event.path {
        Some(path) => Cow::Borrowed(path.as_slice()),
        None => Cow::Owned(tree.composed_path(event.origin)),
    }
}

/// Check whether any entry of `path` is a horizontal slider.
#[must_use]
pub fn path_is_eligible(tree: &VisualTree, path: &[PathEntry]) -> bool {
    path.iter()
        .any(|entry| tree.has_capability(*entry, Capabilities::HORIZONTAL_SLIDER))
}

/// Check whether `event` started inside a horizontal slider.
#[must_use]
pub fn is_eligible(tree: &VisualTree, event: &GestureEvent) -> bool {
    path_is_eligible(tree, &ancestry(tree, event))
}
