//! HTTP status classification and body decoding for catalog responses.
//!
//! Both the browser client and the CLI hand the raw status line and body text
//! to these helpers so that every surface reports failures identically.

use crate::error::CatalogError;
use crate::model::EventCatalog;

/// Reject any status outside the 2xx range.
///
/// # Errors
///
/// Returns [`CatalogError::Status`] carrying the status code and reason phrase.
pub fn check_status(status: u16, status_text: &str) -> Result<(), CatalogError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogError::Status {
            status,
            status_text: status_text.to_string(),
        })
    }
}

/// Decode a catalog body that has already passed the status check.
///
/// # Errors
///
/// Returns [`CatalogError::Decode`] when the body is not a catalog document.
pub fn decode_catalog(body: &str) -> Result<EventCatalog, CatalogError> {
    EventCatalog::from_json(body)
}

/// Classify a complete response: status first, then the body.
///
/// # Errors
///
/// Returns the status failure when the response was not successful, otherwise
/// any decode failure of the body.
pub fn read_catalog_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<EventCatalog, CatalogError> {
    check_status(status, status_text)?;
    decode_catalog(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        assert!(check_status(200, "OK").is_ok());
        assert!(check_status(204, "No Content").is_ok());
        assert!(check_status(299, "").is_ok());
        assert!(check_status(199, "").is_err());
        assert!(check_status(304, "Not Modified").is_err());
    }

    #[test]
    fn failing_status_wins_over_body() {
        let err = read_catalog_response(500, "Internal Server Error", r#"{"events":[]}"#)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
    }

    #[test]
    fn html_fallback_page_is_a_decode_error() {
        let err = read_catalog_response(200, "OK", "<!doctype html><html></html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode { .. }));
    }

    #[test]
    fn empty_event_list_decodes() {
        let catalog = read_catalog_response(200, "OK", r#"{"events":[]}"#).unwrap();
        assert!(catalog.is_empty());
    }
}
