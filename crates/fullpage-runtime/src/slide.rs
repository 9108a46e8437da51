#![forbid(unsafe_code)]

//! Slide descriptors.
//!
//! The controller never renders slides. It only needs to know how many there
//! are on each axis, so a [`Slide`] is an identity key, an optional size
//! override for the composition layer, and an optional horizontal sequence.

use std::borrow::Cow;

/// Size override a composition layer may apply to a slide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideStyle {
    /// Width override in pixels.
    pub width: Option<f64>,
    /// Height override in pixels.
    pub height: Option<f64>,
}

/// One full-viewport slide, optionally holding a horizontal sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slide {
    /// Explicit identity key.
    pub key: Option<String>,
    /// Size override.
    pub style: Option<SlideStyle>,
    /// Horizontal sub-slides. A slide with a sequence is a horizontal slider.
    pub sequence: Option<Vec<Slide>>,
}

impl Slide {
    /// A plain slide with no key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A horizontal slider holding `slides`.
    #[must_use]
    pub fn horizontal(slides: Vec<Slide>) -> Self {
        Self {
            sequence: Some(slides),
            ..Self::default()
        }
    }

    /// Set the identity key (builder pattern).
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the size override (builder pattern).
    #[must_use]
    pub fn with_style(mut self, style: SlideStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Check whether this slide is a horizontal slider.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.sequence.is_some()
    }

    /// Number of horizontal sub-slides (0 for a plain slide).
    #[must_use]
    pub fn horizontal_len(&self) -> usize {
        self.sequence.as_ref().map_or(0, Vec::len)
    }

    /// Key of this slide at vertical position `index`.
    ///
    /// Falls back to `vertical-slide-{index}` without an explicit key.
    #[must_use]
    pub fn vertical_key(&self, index: usize) -> Cow<'_, str> {
        self.key_or(|| format!("vertical-slide-{index}"))
    }

    /// Key of this slide at horizontal position `index`.
    ///
    /// Falls back to `horizontal-slide-{index}` without an explicit key.
    #[must_use]
    pub fn horizontal_key(&self, index: usize) -> Cow<'_, str> {
        self.key_or(|| format!("horizontal-slide-{index}"))
    }

    fn key_or(&self, fallback: impl FnOnce() -> String) -> Cow<'_, str> {
        match &self.key {
            Some(key) => Cow::Borrowed(key.as_str()),
            None => Cow::Owned(fallback()),
        }
    }
}
