//! Catalog fixtures.

use serde_json::{Value, json};

/// Sample catalog document, identical to the one shipped with the UI.
pub const SAMPLE_CATALOG_JSON: &str = include_str!("../fixtures/events-mock-data.json");

/// Parsed form of [`SAMPLE_CATALOG_JSON`] for tests that need to tweak it.
///
/// # Panics
///
/// Panics if the bundled fixture is not valid JSON.
#[must_use]
pub fn sample_catalog_value() -> Value {
    serde_json::from_str(SAMPLE_CATALOG_JSON).expect("fixture catalog is valid JSON")
}

/// Single-event catalog document with one detail per `(date, time)` pair.
#[must_use]
pub fn catalog_with_event(name: &str, schedule: &[(&str, &str)]) -> String {
    let details: Vec<Value> = schedule
        .iter()
        .map(|(date, time)| {
            json!({
                "date": date,
                "time": time,
                "ticketPrices": {"box": 100, "orchestra": 80, "mainFloor": 60, "balcony": 30}
            })
        })
        .collect();
    json!({
        "events": [{
            "eventName": name,
            "description": format!("{name} description"),
            "eventDetails": details,
        }]
    })
    .to_string()
}
