#![forbid(unsafe_code)]

//! Runtime: the scroll navigation controller and its pure helpers.
//!
//! # Role in fullpage
//! `fullpage-runtime` turns resolved gestures into one-at-a-time slide
//! transitions. It owns the admission lock, the axis arbitration, and the
//! session-wide record of which slide is active.
//!
//! # Primary responsibilities
//! - **ScrollController**: the `Idle` / `Transitioning` state machine.
//! - **resolve**: next-index computation with the wrap policy.
//! - **eligibility**: horizontal-slider lookup along an ancestry path.
//! - **Session / PositionStore**: shared active indices, written only when a
//!   transition completes.
//! - **FullpageConfig**: timing and wrap settings, optionally loaded from
//!   TOML or JSON (`config` feature).

pub mod config;
pub mod controller;
pub mod eligibility;
pub mod error;
pub mod resolver;
pub mod slide;
pub mod store;

pub use config::FullpageConfig;
pub use controller::{
    FullpageBuilder, NavState, ScrollController, ScrollNavigation, TransitionRequest,
};
pub use error::FullpageError;
pub use resolver::resolve;
pub use slide::Slide;
pub use store::{PositionStore, Session, SlidePosition};
