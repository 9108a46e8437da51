#![forbid(unsafe_code)]

//! Core: gesture events, host seams, visual tree capabilities, and tweens.
//!
//! # Role in fullpage
//! `fullpage-core` is the input and motion layer. It owns the normalized
//! [`GestureEvent`](event::GestureEvent) a gesture source emits, the traits a
//! host implements to receive frames and scroll offsets, the visual tree the
//! controller walks for eligibility, and the eased tween that drives a slide
//! transition.
//!
//! # How it fits in the system
//! The runtime (`fullpage-runtime`) consumes these types and owns the
//! navigation state machine. Nothing in this crate holds navigation state;
//! every type here is either a value or a single-run executor.

pub mod animation;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod gesture;
pub mod surface;
pub mod tree;

pub use geometry::{Axis, ViewportSize};
