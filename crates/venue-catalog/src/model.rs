//! Serde model for the catalog document and the merged detail projection.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Whole catalog document, loaded once per view activation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCatalog {
    /// Events in document order; lookup returns the first match.
    pub events: Vec<Event>,
}

impl EventCatalog {
    /// Decode a catalog from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] when the text is not a catalog document.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(text).map_err(|err| CatalogError::decode(err.to_string()))
    }

    /// Number of events in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A named production with one or more scheduled instances.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Human-readable name, matched case-insensitively.
    pub event_name: String,
    /// Free-text description.
    pub description: String,
    /// Scheduled instances in document order.
    pub event_details: Vec<EventDetail>,
}

impl Event {
    /// First detail whose date equals `date` exactly.
    #[must_use]
    pub fn detail_for(&self, date: &str) -> Option<&EventDetail> {
        self.event_details.iter().find(|detail| detail.date == date)
    }

    /// Scheduled dates in document order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.event_details.iter().map(|detail| detail.date.as_str())
    }
}

/// One scheduled instance of an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// Date string; compared verbatim against the route parameter.
    pub date: String,
    /// Start time as authored in the document.
    pub time: String,
    /// Per-tier prices for this instance.
    pub ticket_prices: PriceSheet,
}

/// Per-tier ticket prices. Values are passed through without validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSheet {
    /// Box seats.
    #[serde(rename = "box")]
    pub box_seat: f64,
    /// Orchestra seats.
    pub orchestra: f64,
    /// Main floor seats.
    pub main_floor: f64,
    /// Balcony seats.
    pub balcony: f64,
}

impl PriceSheet {
    /// Tier labels paired with prices, in display order.
    #[must_use]
    pub const fn tiers(&self) -> [(&'static str, f64); 4] {
        [
            ("Box", self.box_seat),
            ("Orchestra", self.orchestra),
            ("Main Floor", self.main_floor),
            ("Balcony", self.balcony),
        ]
    }
}

/// Merged event + detail projection rendered by the detail view.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    /// Event name as authored in the catalog.
    pub event_name: String,
    /// Event description.
    pub description: String,
    /// Matched date (identical to the requested date).
    pub date: String,
    /// Matched start time.
    pub time: String,
    /// Matched price sheet.
    pub ticket_prices: PriceSheet,
}

impl EventView {
    /// Project an event and one of its details into a view.
    #[must_use]
    pub fn project(event: &Event, detail: &EventDetail) -> Self {
        Self {
            event_name: event.event_name.clone(),
            description: event.description.clone(),
            date: detail.date.clone(),
            time: detail.time.clone(),
            ticket_prices: detail.ticket_prices,
        }
    }
}

/// Render a price the way the page copy expects (`$75`, `$42.5`).
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("${value}")
}
