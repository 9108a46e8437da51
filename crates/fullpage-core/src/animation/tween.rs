#![forbid(unsafe_code)]

//! Scroll tween: a single eased run of one scroll offset.
//!
//! A [`ScrollTween`] moves a surface offset from its start value to a target
//! over a fixed duration. Each host frame advances an internal clock by a
//! fixed increment, writes the eased value to the surface, and schedules the
//! next frame. When the clock reaches the duration the tween writes the exact
//! target, stops scheduling, and hands back its completion payload.
//!
//! # Invariants
//!
//! 1. The completion payload is returned exactly once.
//! 2. Completion is decided by comparing the clock against the duration,
//!    never by counting frames.
//! 3. The final write is exactly the target value.
//! 4. At most one frame request is outstanding at any time.
//!
//! # Failure Modes
//!
//! - Zero duration: completes on the first tick at the target value.
//! - Zero increment: clamped to 1ms so the clock always advances.
//! - Frames with an unknown id (stale callbacks): ignored.

use std::time::Duration;

use super::{EasingFn, ease_out_quad};
use crate::frame::{FrameId, FrameScheduler};
use crate::geometry::Axis;
use crate::surface::ScrollSurface;

/// Default transition duration (500ms).
pub const DEFAULT_DURATION: Duration = Duration::from_millis(500);

/// Default clock increment per frame (10ms).
pub const DEFAULT_INCREMENT: Duration = Duration::from_millis(10);

const MIN_INCREMENT: Duration = Duration::from_millis(1);

/// Timing parameters for a tween.
#[derive(Debug, Clone, Copy)]
pub struct TweenConfig {
    /// Total run time.
    pub duration: Duration,
    /// Clock advance per frame.
    pub increment: Duration,
    /// Progress curve.
    pub easing: EasingFn,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            increment: DEFAULT_INCREMENT,
            easing: ease_out_quad,
        }
    }
}

impl TweenConfig {
    /// Set the duration (builder pattern).
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the per-frame increment (builder pattern).
    #[must_use]
    pub fn increment(mut self, increment: Duration) -> Self {
        self.increment = increment;
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }
}

/// One eased run of a scroll offset, carrying a completion payload `C`.
pub struct ScrollTween<C> {
    axis: Axis,
    start: f64,
    target: f64,
    config: TweenConfig,
    elapsed: Duration,
    frame: Option<FrameId>,
    on_complete: Option<C>,
}

impl<C> std::fmt::Debug for ScrollTween<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTween")
            .field("axis", &self.axis)
            .field("start", &self.start)
            .field("target", &self.target)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.config.duration)
            .field("frame", &self.frame)
            .field("complete", &self.is_complete())
            .finish()
    }
}

impl<C> ScrollTween<C> {
    /// Create a tween that has not been scheduled yet.
    #[must_use]
    pub fn new(axis: Axis, start: f64, target: f64, config: TweenConfig, on_complete: C) -> Self {
        Self {
            axis,
            start,
            target,
            config,
            elapsed: Duration::ZERO,
            frame: None,
            on_complete: Some(on_complete),
        }
    }

    /// Request the first frame.
    ///
    /// Calling this on a scheduled or finished tween does nothing.
    pub fn start<F: FrameScheduler + ?Sized>(&mut self, frames: &mut F) {
        if self.frame.is_none() && self.on_complete.is_some() {
            self.frame = Some(frames.request_frame());
        }
    }

    /// Handle a fired frame.
    ///
    /// Advances one tick when `id` is the outstanding request. Returns the
    /// completion payload on the tick that finishes the run, `None`
    /// otherwise.
    pub fn on_frame<S, F>(&mut self, id: FrameId, surface: &mut S, frames: &mut F) -> Option<C>
    where
        S: ScrollSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        if self.frame != Some(id) {
            return None;
        }
        self.frame = None;

        match self.tick(surface) {
            Some(done) => {
                frames.cancel_frame(id);
                Some(done)
            }
            None => {
                self.frame = Some(frames.request_frame());
                None
            }
        }
    }

    /// Advance the clock one increment and write the eased value.
    ///
    /// Does not touch frame scheduling. A finished tween ignores further
    /// ticks and writes nothing.
    pub fn tick<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S) -> Option<C> {
        self.on_complete.as_ref()?;

        self.elapsed = self
            .elapsed
            .saturating_add(self.config.increment.max(MIN_INCREMENT));
        let finished = self.elapsed >= self.config.duration;
        // Land exactly on target regardless of float drift.
        let value = if finished { self.target } else { self.value() };
        surface.set_scroll_offset(self.axis, value);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "fullpage.tween",
            axis = %self.axis,
            value,
            elapsed_ms = u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
            finished,
            "tween tick"
        );

        if finished {
            self.on_complete.take()
        } else {
            None
        }
    }

    /// Normalized elapsed time in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.config.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.config.duration.as_secs_f64()).min(1.0)
    }

    /// Eased offset at the current clock.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.start + (self.target - self.start) * (self.config.easing)(self.progress())
    }

    /// True once the completion payload has been handed back.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.on_complete.is_none()
    }

    /// Axis this tween drives.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Offset the run started from.
    #[must_use]
    pub const fn start_value(&self) -> f64 {
        self.start
    }

    /// Offset the run ends at.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Clock time consumed so far.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Completion payload still held by a running tween.
    #[must_use]
    pub fn payload(&self) -> Option<&C> {
        self.on_complete.as_ref()
    }

    /// Outstanding frame request, if any.
    #[must_use]
    pub const fn frame(&self) -> Option<FrameId> {
        self.frame
    }
}

/// Start a tween from the surface's current offset towards `target`.
pub fn animate<C, S, F>(
    surface: &S,
    frames: &mut F,
    axis: Axis,
    target: f64,
    config: TweenConfig,
    on_complete: C,
) -> ScrollTween<C>
where
    S: ScrollSurface + ?Sized,
    F: FrameScheduler + ?Sized,
{
    let mut tween = ScrollTween::new(axis, surface.scroll_offset(axis), target, config, on_complete);
    tween.start(frames);
    tween
}
