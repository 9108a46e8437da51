#![forbid(unsafe_code)]

//! Scroll navigation controller.
//!
//! [`ScrollController`] turns resolved gestures into one-at-a-time slide
//! transitions.
//!
//! # State Machine
//!
//! ```text
//!            gesture (unlocked, pending)
//!   Idle ─────────────────────────────────▶ Transitioning
//!    ▲                                          │
//!    │   no eligible move / ineligible axis     │
//!    ├──────────────────────────────────────────┤
//!    │   tween completion (store updated)       │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. At most one tween is in flight per controller.
//! 2. The lock is held from gesture acceptance until the tween completes or
//!    the gesture is rejected as a no-op.
//! 3. The position store is written only on tween completion, one axis
//!    field per completion.
//! 4. Every unlock re-arms the gesture source.
//! 5. Moves resolve from the active index clamped to the axis length, so a
//!    horizontal index left over from a longer slider never strands the
//!    current one.
//!
//! # Failure Modes
//!
//! None surface to the caller. Gestures that arrive while locked or before
//! the source resolved them are dropped. Moves past a finite end and
//! horizontal gestures outside a horizontal slider unlock immediately.

use std::time::Duration;

use fullpage_core::animation::{ScrollTween, TweenConfig, animate};
use fullpage_core::event::{GestureEvent, Intent};
use fullpage_core::frame::{FrameId, FrameScheduler};
use fullpage_core::geometry::{Axis, ViewportSize};
use fullpage_core::gesture::{GestureBinding, GestureSource};
use fullpage_core::surface::ScrollSurface;
use fullpage_core::tree::{Capabilities, NodeId, VisualTree};

use crate::config::FullpageConfig;
use crate::eligibility;
use crate::error::FullpageError;
use crate::resolver::resolve;
use crate::slide::Slide;
use crate::store::{PositionStore, Session, SlidePosition};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Unlocked; the next resolved gesture is accepted.
    Idle,
    /// Locked; gestures are dropped.
    Transitioning,
}

/// One accepted slide move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    /// Axis being navigated.
    pub axis: Axis,
    /// Active index when the move was accepted.
    pub from_index: usize,
    /// Index that becomes active on completion.
    pub to_index: usize,
    /// Tween duration.
    pub duration: Duration,
}

/// The navigation capability a gesture source drives.
pub trait ScrollNavigation {
    /// Admit or drop a gesture.
    fn on_scroll(&mut self, event: &GestureEvent);

    /// Take the admission lock.
    fn lock_scroll(&mut self);

    /// Release the admission lock and re-arm the gesture source.
    fn unlock_scroll(&mut self);

    /// Move one slide along the vertical axis.
    fn vertical_scroll(&mut self, intent: Intent);

    /// Move one slide along the active horizontal sequence.
    fn horizontal_scroll(&mut self, intent: Intent);
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Assembles slides and configuration into a [`ScrollController`].
#[derive(Debug, Clone, Default)]
pub struct FullpageBuilder {
    slides: Option<Vec<Slide>>,
    config: FullpageConfig,
    tree: Option<VisualTree>,
    viewport: ViewportSize,
}

impl FullpageBuilder {
    /// Create a builder with default config and no slides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical slide sequence (builder pattern).
    #[must_use]
    pub fn slides(mut self, slides: Vec<Slide>) -> Self {
        self.slides = Some(slides);
        self
    }

    /// Set the wrap policy (builder pattern).
    #[must_use]
    pub fn infinite(mut self, infinite: bool) -> Self {
        self.config.infinite = infinite;
        self
    }

    /// Replace the whole config (builder pattern).
    #[must_use]
    pub fn config(mut self, config: FullpageConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the visual tree gestures originate in (builder pattern).
    ///
    /// Without one, the builder mounts a tree from the slides: one node per
    /// vertical slide under the root, tagged [`Capabilities::HORIZONTAL_SLIDER`]
    /// when the slide holds a sequence, with one child per sub-slide.
    #[must_use]
    pub fn tree(mut self, tree: VisualTree) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Set the initial viewport size (builder pattern).
    #[must_use]
    pub fn viewport(mut self, viewport: ViewportSize) -> Self {
        self.viewport = viewport;
        self
    }

    /// Build a controller attached to `session`.
    ///
    /// Activating the controller creates the session's position store if it
    /// does not exist yet.
    pub fn build<G, F, S>(
        self,
        session: &Session,
        source: G,
        frames: F,
        surface: S,
    ) -> Result<ScrollController<G, F, S>, FullpageError>
    where
        G: GestureSource,
        F: FrameScheduler,
        S: ScrollSurface,
    {
        let slides = self.slides.ok_or(FullpageError::MissingSlides)?;
        let errors = self.config.validate();
        if !errors.is_empty() {
            return Err(FullpageError::Validation(errors));
        }

        let (tree, slide_nodes) = match self.tree {
            Some(tree) => (tree, Vec::new()),
            None => mount(&slides),
        };

        let store = session.store();
        tracing::debug!(
            target: "fullpage.controller",
            slides = slides.len(),
            infinite = self.config.infinite,
            transition_ms = self.config.transition_ms,
            "controller activated"
        );

        Ok(ScrollController {
            tween_config: self.config.tween_config(),
            config: self.config,
            slides,
            tree,
            slide_nodes,
            viewport: self.viewport,
            store,
            source,
            frames,
            surface,
            locked: false,
            tween: None,
        })
    }
}

/// Build a visual tree mirroring `slides`.
///
/// Returns the tree and the node of each vertical slide, in order.
fn mount(slides: &[Slide]) -> (VisualTree, Vec<NodeId>) {
    let mut tree = VisualTree::new();
    let root = tree.root();
    let nodes = slides
        .iter()
        .map(|slide| {
            let caps = if slide.is_horizontal() {
                Capabilities::HORIZONTAL_SLIDER
            } else {
                Capabilities::empty()
            };
            let node = tree.append(root, caps);
            for _ in 0..slide.horizontal_len() {
                tree.append(node, Capabilities::empty());
            }
            node
        })
        .collect();
    (tree, nodes)
}

// ---------------------------------------------------------------------------
// ScrollController
// ---------------------------------------------------------------------------

/// Gesture-driven slide paginator over two axes.
pub struct ScrollController<G, F, S> {
    slides: Vec<Slide>,
    config: FullpageConfig,
    tween_config: TweenConfig,
    tree: VisualTree,
    slide_nodes: Vec<NodeId>,
    viewport: ViewportSize,
    store: PositionStore,
    source: G,
    frames: F,
    surface: S,
    locked: bool,
    tween: Option<ScrollTween<TransitionRequest>>,
}

impl<G, F, S> std::fmt::Debug for ScrollController<G, F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollController")
            .field("slides", &self.slides.len())
            .field("infinite", &self.config.infinite)
            .field("viewport", &self.viewport)
            .field("position", &self.store.position())
            .field("locked", &self.locked)
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

impl<G, F, S> ScrollController<G, F, S>
where
    G: GestureSource,
    F: FrameScheduler,
    S: ScrollSurface,
{
    /// Second source callback slot; same admission rules as `on_scroll`.
    pub fn on_touch(&mut self, event: &GestureEvent) {
        ScrollNavigation::on_scroll(self, event);
    }

    /// Record the latest viewport size.
    ///
    /// Offsets of transitions started afterwards use the new size. A tween
    /// already in flight keeps its target.
    pub fn on_resize(&mut self, viewport: ViewportSize) {
        tracing::trace!(
            target: "fullpage.controller",
            width = viewport.width,
            height = viewport.height,
            "viewport resized"
        );
        self.viewport = viewport;
    }

    /// Advance the in-flight tween on a fired frame.
    ///
    /// Frames that do not belong to the current tween are ignored.
    pub fn on_frame(&mut self, id: FrameId) {
        let Some(tween) = self.tween.as_mut() else {
            tracing::trace!(target: "fullpage.controller", frame = id.0, "stale frame ignored");
            return;
        };

        if let Some(request) = tween.on_frame(id, &mut self.surface, &mut self.frames) {
            self.tween = None;
            self.store.commit(request.axis, request.to_index);
            tracing::debug!(
                target: "fullpage.controller",
                axis = %request.axis,
                from = request.from_index,
                to = request.to_index,
                "transition completed"
            );
            self.unlock_scroll();
        }
    }

    fn delegate_scroll(&mut self, event: &GestureEvent) {
        match event.direction {
            Axis::Vertical => self.vertical_scroll(event.intent),
            Axis::Horizontal => {
                if !eligibility::is_eligible(&self.tree, event) {
                    tracing::debug!(
                        target: "fullpage.controller",
                        origin = event.origin.index(),
                        "horizontal gesture outside a horizontal slider"
                    );
                    self.unlock_scroll();
                    return;
                }
                self.horizontal_scroll(event.intent);
            }
        }
    }

    fn scroll_axis(&mut self, axis: Axis, intent: Intent) {
        if self.tween.is_some() {
            tracing::trace!(
                target: "fullpage.controller",
                axis = %axis,
                "move dropped while transition in flight"
            );
            return;
        }
        self.lock_scroll();

        let length = self.axis_length(axis);
        let current = self.active_index(axis);
        let Some(next) = resolve(intent, length, self.config.infinite, current) else {
            tracing::debug!(
                target: "fullpage.controller",
                axis = %axis,
                current,
                length,
                forward = intent.is_forward(),
                "no eligible move"
            );
            self.unlock_scroll();
            return;
        };

        let request = TransitionRequest {
            axis,
            from_index: current,
            to_index: next,
            duration: self.tween_config.duration,
        };
        let target = self.viewport.offset_of(axis, next);
        tracing::debug!(
            target: "fullpage.controller",
            axis = %axis,
            from = current,
            to = next,
            target_px = target,
            "transition started"
        );
        self.tween = Some(animate(
            &self.surface,
            &mut self.frames,
            axis,
            target,
            self.tween_config,
            request,
        ));
    }

    /// Number of slides on `axis` given the current position.
    ///
    /// The horizontal length is that of the active vertical slide's
    /// sequence, 0 when it has none.
    #[must_use]
    pub fn axis_length(&self, axis: Axis) -> usize {
        match axis {
            Axis::Vertical => self.slides.len(),
            Axis::Horizontal => self
                .slides
                .get(self.store.active(Axis::Vertical))
                .map_or(0, Slide::horizontal_len),
        }
    }

    /// Active index on `axis`, clamped to the axis length.
    ///
    /// The stored horizontal index is shared by every slider in the session,
    /// so after a vertical move it may point past the end of the new slider.
    #[must_use]
    pub fn active_index(&self, axis: Axis) -> usize {
        let length = self.axis_length(axis);
        self.store.active(axis).min(length.saturating_sub(1))
    }

    /// What a host needs to wire its gesture recognizer to this controller.
    #[must_use]
    pub fn binding(&self) -> GestureBinding {
        GestureBinding::new(self.tree.root())
    }
}

impl<G, F, S> ScrollController<G, F, S> {
    /// Current state.
    #[must_use]
    pub fn state(&self) -> NavState {
        if self.locked {
            NavState::Transitioning
        } else {
            NavState::Idle
        }
    }

    /// True while a gesture is being handled or a tween is running.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The move currently animating, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<TransitionRequest> {
        self.tween.as_ref().and_then(|t| t.payload().copied())
    }

    /// Session position as seen by this controller.
    #[must_use]
    pub fn position(&self) -> SlidePosition {
        self.store.position()
    }

    /// Handle to the shared position store.
    #[must_use]
    pub fn store(&self) -> &PositionStore {
        &self.store
    }

    /// Vertical slide sequence.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &FullpageConfig {
        &self.config
    }

    /// Latest known viewport size.
    #[must_use]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Visual tree gestures originate in.
    #[must_use]
    pub fn tree(&self) -> &VisualTree {
        &self.tree
    }

    /// Node mounted for vertical slide `index`.
    ///
    /// `None` when the host supplied its own tree or `index` is out of range.
    #[must_use]
    pub fn slide_node(&self, index: usize) -> Option<NodeId> {
        self.slide_nodes.get(index).copied()
    }

    /// Mutable visual tree, for hosts that mount nodes after construction.
    pub fn tree_mut(&mut self) -> &mut VisualTree {
        &mut self.tree
    }

    /// Gesture source.
    #[must_use]
    pub fn source(&self) -> &G {
        &self.source
    }

    /// Frame scheduler.
    #[must_use]
    pub fn frames(&self) -> &F {
        &self.frames
    }

    /// Mutable frame scheduler, for hosts that pump frames themselves.
    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    /// Scroll surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<G, F, S> ScrollNavigation for ScrollController<G, F, S>
where
    G: GestureSource,
    F: FrameScheduler,
    S: ScrollSurface,
{
    fn on_scroll(&mut self, event: &GestureEvent) {
        if self.locked {
            tracing::trace!(
                target: "fullpage.controller",
                direction = %event.direction,
                "gesture dropped while locked"
            );
            return;
        }
        if !event.pending {
            tracing::trace!(
                target: "fullpage.controller",
                direction = %event.direction,
                "gesture dropped before resolution"
            );
            return;
        }

        self.lock_scroll();
        self.delegate_scroll(event);
    }

    fn lock_scroll(&mut self) {
        if !self.locked {
            tracing::trace!(target: "fullpage.controller", "scroll locked");
        }
        self.locked = true;
    }

    fn unlock_scroll(&mut self) {
        if self.tween.is_some() {
            tracing::trace!(
                target: "fullpage.controller",
                "unlock ignored while transition in flight"
            );
            return;
        }
        self.source.listen();
        self.locked = false;
        tracing::trace!(target: "fullpage.controller", "scroll unlocked");
    }

    fn vertical_scroll(&mut self, intent: Intent) {
        self.scroll_axis(Axis::Vertical, intent);
    }

    fn horizontal_scroll(&mut self, intent: Intent) {
        self.scroll_axis(Axis::Horizontal, intent);
    }
}
