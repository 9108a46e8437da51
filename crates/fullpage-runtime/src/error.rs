#![forbid(unsafe_code)]

//! Construction-time errors.
//!
//! Gesture handling never fails: locked, unresolved, out-of-range and
//! ineligible gestures are ordinary no-ops. Only building a controller from a
//! bad configuration surfaces an error.

/// Errors raised while building a controller or loading its config.
#[derive(Debug)]
pub enum FullpageError {
    /// No slide sequence was supplied.
    MissingSlides,
    /// Configuration values out of range.
    Validation(Vec<String>),
    /// I/O error reading a config file.
    #[cfg(feature = "config")]
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
}

impl std::fmt::Display for FullpageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSlides => f.write_str("a slide sequence is required"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
            #[cfg(feature = "config")]
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for FullpageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSlides | Self::Validation(_) => None,
            #[cfg(feature = "config")]
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
        }
    }
}
