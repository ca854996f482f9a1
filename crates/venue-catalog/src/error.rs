//! Catalog retrieval and lookup failures.
//!
//! # Design
//! - `Display` output is the exact copy rendered in place of the detail view.
//! - Diagnostic detail (transport errors, serde messages) stays in fields so
//!   it can be logged without leaking into the UI text.

use thiserror::Error;

/// Failure while retrieving or decoding the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog endpoint answered with a non-success status.
    #[error("Failed to fetch event data. Error: {status} {status_text}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase reported alongside the status.
        status_text: String,
    },
    /// The request never produced a response (network, CORS, I/O).
    #[error("Error fetching event data.")]
    Transport {
        /// Underlying transport error message.
        detail: String,
    },
    /// The response body was not a valid catalog document.
    #[error("Error fetching event data.")]
    Decode {
        /// Underlying decoder error message.
        detail: String,
    },
}

impl CatalogError {
    /// Wrap a transport failure.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    /// Wrap a decode failure.
    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }

    /// Diagnostic detail suitable for operator logs.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Status {
                status,
                status_text,
            } => format!("status {status} {status_text}"),
            Self::Transport { detail } | Self::Decode { detail } => detail.clone(),
        }
    }
}

/// Failure to locate the requested event inside a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No event name matched after normalisation.
    #[error("Event not found.")]
    EventNotFound,
    /// The event exists but has no detail for the requested date.
    #[error("Event details not found for the specified date.")]
    DetailNotFound,
    /// The event-name route token carried a malformed percent escape.
    #[error("Error fetching event data.")]
    MalformedName,
}

/// Any terminal failure of a single view activation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
    /// Retrieval failed before lookup could run.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Retrieval succeeded but the identifiers did not resolve.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_embeds_code_and_reason() {
        let err = CatalogError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch event data. Error: 500 Internal Server Error"
        );
        assert_eq!(err.detail(), "status 500 Internal Server Error");
    }

    #[test]
    fn transport_and_decode_share_generic_copy() {
        let transport = CatalogError::transport("connection refused");
        let decode = CatalogError::decode("expected value at line 1 column 1");
        assert_eq!(transport.to_string(), "Error fetching event data.");
        assert_eq!(decode.to_string(), "Error fetching event data.");
        assert_eq!(transport.detail(), "connection refused");
    }

    #[test]
    fn activation_error_is_transparent() {
        let err = ActivationError::from(LookupError::DetailNotFound);
        assert_eq!(
            err.to_string(),
            "Event details not found for the specified date."
        );
        let err = ActivationError::from(LookupError::EventNotFound);
        assert_eq!(err.to_string(), "Event not found.");
    }
}
