//! Error types for the driver
//!
//! Two layers of errors exist:
//!
//! - [`ConfigError`] - invalid driver configuration, raised before any bus
//!   traffic happens
//! - [`Error`] - runtime errors during display operations, wrapping the
//!   transport error of the active [`DisplayInterface`] implementation
//!
//! Transport errors are reported to the caller unchanged and are never
//! retried internally; the driver cannot know whether a retry is safe at
//! the hardware level.

use crate::interface::DisplayInterface;

/// Errors raised while validating driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height outside the controller limits, or a height that
    /// does not divide into 8-row pages
    InvalidDimensions {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid dimensions {width}x{height} (max {}x{}, height must be a multiple of 8)",
                    crate::config::MAX_COLUMNS,
                    crate::config::MAX_ROWS
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific transport
/// error, so callers can match on the underlying hardware failure.
pub enum Error<I: DisplayInterface> {
    /// Transport error (bus write or control pin failure)
    Interface(I::Error),
    /// Invalid configuration
    Config(ConfigError),
}

// Manual impl: the associated error is Debug by trait bound, the interface
// itself does not have to be.
impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Error::Config(e) => f.debug_tuple("Config").field(e).finish(),
        }
    }
}

impl<I: DisplayInterface> From<ConfigError> for Error<I> {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::Config(e) => write!(f, "{e}"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}
