#![forbid(unsafe_code)]

//! fullpage public facade crate.
//!
//! Re-exports the types a host needs to mount a slide paginator and offers a
//! lightweight prelude.
//!
//! ```rust,ignore
//! use fullpage::prelude::*;
//!
//! let session = Session::new();
//! let mut nav = FullpageBuilder::new()
//!     .slides(vec![Slide::new(); 3])
//!     .viewport(ViewportSize::new(1280.0, 720.0))
//!     .build(&session, ListenCounter::new(), ManualFrames::new(), ScrollOffsets::new())?;
//!
//! let root = nav.tree().root();
//! nav.on_scroll(&GestureEvent::vertical(true, root));
//! while let Some(frame) = nav.frames_mut().next_frame() {
//!     nav.on_frame(frame);
//! }
//! ```

// --- Core re-exports -------------------------------------------------------

pub use fullpage_core::animation::{EasingFn, ScrollTween, TweenConfig, animate, ease_out_quad};
pub use fullpage_core::event::{GestureEvent, GestureKind, Intent};
pub use fullpage_core::frame::{FrameId, FrameScheduler, ManualFrames};
pub use fullpage_core::geometry::{Axis, ViewportSize};
pub use fullpage_core::gesture::{GestureBinding, GestureSource, ListenCounter};
pub use fullpage_core::surface::{ScrollOffsets, ScrollSurface};
pub use fullpage_core::tree::{Capabilities, NodeId, PathEntry, VisualTree};

// --- Runtime re-exports ----------------------------------------------------

pub use fullpage_runtime::slide::SlideStyle;
pub use fullpage_runtime::{
    FullpageBuilder, FullpageConfig, FullpageError, NavState, PositionStore, ScrollController,
    ScrollNavigation, Session, Slide, SlidePosition, TransitionRequest, resolve,
};

/// Standard result type for fullpage setup.
pub type Result<T, E = FullpageError> = std::result::Result<T, E>;

/// Common imports for hosts.
pub mod prelude {
    pub use crate::{
        Axis, Capabilities, FrameScheduler, FullpageBuilder, FullpageConfig, FullpageError,
        GestureEvent, GestureSource, Intent, ListenCounter, ManualFrames, NavState,
        ScrollController, ScrollNavigation, ScrollOffsets, ScrollSurface, Session, Slide,
        SlidePosition, ViewportSize, VisualTree,
    };
}
