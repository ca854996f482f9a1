//! Per-activation view state.
//!
//! # Design
//! - One tagged union instead of separate loading/error/data flags, so only
//!   one state can ever be observed.
//! - Errors carry the user-facing message only; diagnostics are logged at the
//!   point of failure.

use std::fmt::Display;

/// Placeholder copy rendered while an activation is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// Lifecycle of a single page activation.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    /// Retrieval is in flight.
    Loading,
    /// Retrieval or lookup failed; the message is shown verbatim.
    Error(String),
    /// Data resolved and is ready to render.
    Loaded(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    /// Collapse an activation result into a terminal state.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    /// Whether the activation is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error message, when the activation failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded value, when the activation succeeded.
    #[must_use]
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
