//! Route-parameter normalisation and event resolution.
//!
//! # Design
//! - Route tokens arrive percent-encoded with hyphens standing in for spaces.
//! - The route token is hyphen-folded and lowercased; catalog names are only
//!   lowercased. Dates compare byte-for-byte.
//! - A token with a malformed percent escape fails the activation.
//! - The first match wins in document order for both events and details.

use crate::error::LookupError;
use crate::model::{Event, EventCatalog, EventView};

/// Percent-decode a route token and turn hyphens back into spaces.
///
/// # Errors
///
/// Returns [`LookupError::MalformedName`] when a `%` is not followed by two
/// hex digits or the escapes do not decode to UTF-8.
pub fn decode_route_name(raw: &str) -> Result<String, LookupError> {
    if !has_valid_escapes(raw) {
        return Err(LookupError::MalformedName);
    }
    let decoded = urlencoding::decode(raw).map_err(|_| LookupError::MalformedName)?;
    Ok(decoded.replace('-', " "))
}

/// Comparison key for a route token: hyphens folded to spaces, lowercased.
#[must_use]
pub fn normalize_event_name(name: &str) -> String {
    name.replace('-', " ").to_lowercase()
}

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let escape = bytes.get(index + 1..index + 3);
            if !escape.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            index += 3;
        } else {
            index += 1;
        }
    }
    true
}

/// Heading text for an event name (hyphens shown as spaces).
#[must_use]
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Hyphenated token used when linking to an event by name.
#[must_use]
pub fn route_name(name: &str) -> String {
    name.replace(' ', "-")
}

impl EventCatalog {
    /// First event whose lowercased name matches the decoded route token.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MalformedName`] when the token cannot be decoded.
    pub fn find_event(&self, event_name: &str) -> Result<Option<&Event>, LookupError> {
        let wanted = normalize_event_name(&decode_route_name(event_name)?);
        Ok(self
            .events
            .iter()
            .find(|event| event.event_name.to_lowercase() == wanted))
    }

    /// Resolve a (name, date) route pair into the merged detail projection.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MalformedName`] when the name token cannot be
    /// decoded, [`LookupError::EventNotFound`] when no event name matches and
    /// [`LookupError::DetailNotFound`] when the event has no detail for the date.
    pub fn resolve(&self, event_name: &str, event_date: &str) -> Result<EventView, LookupError> {
        let Some(event) = self.find_event(event_name)? else {
            tracing::debug!(event_name, events = self.events.len(), "event not found");
            return Err(LookupError::EventNotFound);
        };
        let Some(detail) = event.detail_for(event_date) else {
            tracing::debug!(
                event_name = %event.event_name,
                event_date,
                "no event detail for date"
            );
            return Err(LookupError::DetailNotFound);
        };
        Ok(EventView::project(event, detail))
    }
}
