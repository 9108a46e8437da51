#![forbid(unsafe_code)]

//! Easing curves and the scroll tween executor.
//!
//! Easing functions map normalized time `t ∈ [0, 1]` to normalized progress.
//! Inputs outside that range are clamped.

pub mod tween;

pub use tween::{ScrollTween, TweenConfig, animate};

/// An easing curve over normalized time.
pub type EasingFn = fn(f64) -> f64;

/// Constant speed.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Quadratic curve `-t(t - 2)`: fast start, decelerating into the target.
///
/// This is the curve slide transitions use by default.
#[must_use]
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    -t * (t - 2.0)
}
