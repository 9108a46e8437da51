#![forbid(unsafe_code)]

//! Controller configuration.
//!
//! [`FullpageConfig`] carries the wrap policy and transition timing. With the
//! `config` feature it can be loaded from TOML or JSON.
//!
//! ```toml
//! # fullpage.toml
//! infinite = true
//! transition_ms = 400
//! frame_increment_ms = 16
//! ```
//!
//! ```rust,ignore
//! let config = FullpageConfig::from_toml_file("fullpage.toml")?;
//! ```
//!
//! Missing keys take their defaults, so an empty file is valid.

#[cfg(feature = "config")]
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use fullpage_core::animation::TweenConfig;

#[cfg(feature = "config")]
use crate::error::FullpageError;

/// Upper bound on a single transition.
const MAX_TRANSITION_MS: u64 = 60_000;

/// Wrap policy and transition timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct FullpageConfig {
    /// Cycle past the first/last slide instead of rejecting the move.
    pub infinite: bool,
    /// Duration of one slide transition in milliseconds.
    pub transition_ms: u64,
    /// Clock advance per animation frame in milliseconds.
    pub frame_increment_ms: u64,
}

impl Default for FullpageConfig {
    fn default() -> Self {
        Self {
            infinite: false,
            transition_ms: 500,
            frame_increment_ms: 10,
        }
    }
}

impl FullpageConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, FullpageError> {
        toml::from_str(s).map_err(FullpageError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, FullpageError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(FullpageError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, FullpageError> {
        serde_json::from_str(s).map_err(FullpageError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FullpageError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(FullpageError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.transition_ms > MAX_TRANSITION_MS {
            errors.push(format!(
                "transition_ms must be <= {MAX_TRANSITION_MS}, got {}",
                self.transition_ms
            ));
        }
        if self.frame_increment_ms == 0 {
            errors.push("frame_increment_ms must be > 0".to_string());
        }
        errors
    }

    /// Transition duration.
    #[must_use]
    pub const fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Tween timing derived from this config.
    #[must_use]
    pub fn tween_config(&self) -> TweenConfig {
        TweenConfig::default()
            .duration(self.transition())
            .increment(Duration::from_millis(self.frame_increment_ms))
    }
}
