#![forbid(unsafe_code)]

//! Geometric primitives.

/// One of the two navigation dimensions.
///
/// The vertical axis is the root sequence of slides. The horizontal axis is
/// scoped to whichever vertical slide is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Primary axis (slides stacked top to bottom).
    #[default]
    Vertical,
    /// Secondary axis inside a horizontal slider.
    Horizontal,
}

impl Axis {
    /// Stable lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size of the navigable surface in pixels.
///
/// Every slide occupies exactly one viewport, so the pixel offset of slide
/// `i` along an axis is `i × dimension(axis)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
}

impl ViewportSize {
    /// Create a new viewport size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The extent of one slide along `axis`.
    #[inline]
    pub const fn dimension(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// Scroll offset that brings slide `index` into view along `axis`.
    #[inline]
    pub fn offset_of(&self, axis: Axis, index: usize) -> f64 {
        index as f64 * self.dimension(axis)
    }

    /// Check if the viewport has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
