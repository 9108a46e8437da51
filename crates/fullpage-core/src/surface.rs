#![forbid(unsafe_code)]

//! Scroll surface seam.
//!
//! The element whose scroll offsets a tween drives. Vertical transitions
//! write the top offset, horizontal transitions the left offset.

use crate::geometry::Axis;

/// Something with a readable and writable scroll offset per axis.
pub trait ScrollSurface {
    /// Current offset along `axis`.
    fn scroll_offset(&self, axis: Axis) -> f64;

    /// Apply a new offset along `axis`.
    fn set_scroll_offset(&mut self, axis: Axis, value: f64);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        (**self).scroll_offset(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
        (**self).set_scroll_offset(axis, value);
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Box<S> {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        (**self).scroll_offset(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
        (**self).set_scroll_offset(axis, value);
    }
}

/// In-memory surface holding the two offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffsets {
    /// Vertical offset.
    pub top: f64,
    /// Horizontal offset.
    pub left: f64,
    writes: u64,
}

impl ScrollOffsets {
    /// Surface scrolled to the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            writes: 0,
        }
    }

    /// Number of offset writes applied so far.
    #[must_use]
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl ScrollSurface for ScrollOffsets {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.top,
            Axis::Horizontal => self.left,
        }
    }

    fn set_scroll_offset(&mut self, axis: Axis, value: f64) {
        self.writes += 1;
        match axis {
            Axis::Vertical => self.top = value,
            Axis::Horizontal => self.left = value,
        }
    }
}
