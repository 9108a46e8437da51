#![forbid(unsafe_code)]

//! Frame scheduling seam.
//!
//! Transitions advance one tick per host frame. The controller asks the host
//! for the next frame with [`FrameScheduler::request_frame`] and the host
//! calls back with the returned [`FrameId`] when the frame fires. A finished
//! transition cancels its outstanding request.
//!
//! [`ManualFrames`] is a scheduler for hosts that pump frames themselves
//! (tick loops, tests): it queues requests and hands them out in order.

use std::collections::VecDeque;

/// Identifier of one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Host-side frame callback mechanism.
pub trait FrameScheduler {
    /// Ask for a callback on the next frame.
    fn request_frame(&mut self) -> FrameId;

    /// Withdraw a request made with [`request_frame`](Self::request_frame).
    /// Cancelling a frame that already fired is a no-op.
    fn cancel_frame(&mut self, id: FrameId);
}

impl<F: FrameScheduler + ?Sized> FrameScheduler for &mut F {
    fn request_frame(&mut self) -> FrameId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        (**self).cancel_frame(id);
    }
}

impl<F: FrameScheduler + ?Sized> FrameScheduler for Box<F> {
    fn request_frame(&mut self) -> FrameId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        (**self).cancel_frame(id);
    }
}

/// FIFO frame scheduler driven by the caller.
#[derive(Debug, Clone, Default)]
pub struct ManualFrames {
    next_id: u64,
    queue: VecDeque<FrameId>,
    requested: u64,
    cancelled: u64,
}

impl ManualFrames {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest outstanding frame, if any.
    pub fn next_frame(&mut self) -> Option<FrameId> {
        self.queue.pop_front()
    }

    /// Number of outstanding frame requests.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total requests made since construction.
    #[must_use]
    pub const fn requested(&self) -> u64 {
        self.requested
    }

    /// Total cancellations that removed an outstanding request.
    #[must_use]
    pub const fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.queue.push_back(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        let before = self.queue.len();
        self.queue.retain(|queued| *queued != id);
        if self.queue.len() != before {
            self.cancelled += 1;
        }
    }
}
