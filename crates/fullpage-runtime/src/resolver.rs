#![forbid(unsafe_code)]

//! Slide index resolution.
//!
//! [`resolve`] is the only place that decides whether a gesture moves the
//! active slide and where to. It is a pure function of its inputs.
//!
//! # Invariants
//!
//! 1. A `Some(i)` result always satisfies `i < length`.
//! 2. `length <= 1` never yields a move, whatever the wrap policy.
//! 3. With `infinite == false`, stepping past either end yields `None`.
//! 4. With `infinite == true`, stepping past either end wraps modulo
//!    `length`.

use fullpage_core::event::Intent;

/// Compute the slide to move to from `current`, or `None` when no move is
/// eligible.
#[must_use]
pub fn resolve(intent: Intent, length: usize, infinite: bool, current: usize) -> Option<usize> {
    if length <= 1 {
        return None;
    }

    let candidate = match intent {
        Intent::Forward => current.checked_add(1),
        Intent::Backward => current.checked_sub(1),
    };

    match candidate {
        Some(next) if next < length => Some(next),
        _ if !infinite => None,
        _ => Some(wrap(intent, length, current)),
    }
}

fn wrap(intent: Intent, length: usize, current: usize) -> usize {
    let base = current % length;
    match intent {
        Intent::Forward => (base + 1) % length,
        Intent::Backward => (base + length - 1) % length,
    }
}
