//! End-to-end resolution over the bundled sample catalog.

use venue_catalog::{
    ActivationError, CatalogError, EventCatalog, EventView, LookupError, read_catalog_response,
};
use venue_test_support::fixtures::{SAMPLE_CATALOG_JSON, catalog_with_event};

fn activate(
    status: u16,
    status_text: &str,
    body: &str,
    name: &str,
    date: &str,
) -> Result<EventView, ActivationError> {
    let catalog = read_catalog_response(status, status_text, body)?;
    Ok(catalog.resolve(name, date)?)
}

#[test]
fn nutcracker_route_reaches_loaded_projection() {
    let view = activate(200, "OK", SAMPLE_CATALOG_JSON, "The-Nutcracker", "2024-12-20")
        .expect("sample catalog resolves");
    assert_eq!(view.event_name, "The Nutcracker");
    assert_eq!(view.date, "2024-12-20");
    assert_eq!(view.time, "7:00 PM");
    assert!((view.ticket_prices.balcony - 45.0).abs() < f64::EPSILON);
}

#[test]
fn percent_encoded_route_tokens_resolve() {
    let view = activate(200, "OK", SAMPLE_CATALOG_JSON, "Jazz%20Under-the-Stars", "2025-06-07")
        .expect("encoded name resolves");
    assert!((view.ticket_prices.main_floor - 49.5).abs() < f64::EPSILON);
}

#[test]
fn each_failure_kind_has_its_own_message() {
    let server_error = activate(500, "Internal Server Error", "", "The-Nutcracker", "2024-12-20")
        .unwrap_err();
    assert_eq!(
        server_error,
        ActivationError::Catalog(CatalogError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
        })
    );
    assert!(server_error.to_string().contains("500 Internal Server Error"));

    let missing_event =
        activate(200, "OK", SAMPLE_CATALOG_JSON, "Hamlet", "2024-12-20").unwrap_err();
    assert_eq!(missing_event, ActivationError::Lookup(LookupError::EventNotFound));
    assert_eq!(missing_event.to_string(), "Event not found.");

    let missing_date =
        activate(200, "OK", SAMPLE_CATALOG_JSON, "Swan-Lake", "02/14/2025").unwrap_err();
    assert_eq!(missing_date, ActivationError::Lookup(LookupError::DetailNotFound));
    assert_eq!(
        missing_date.to_string(),
        "Event details not found for the specified date."
    );

    let malformed =
        activate(200, "OK", SAMPLE_CATALOG_JSON, "The-Nutcracker%", "2024-12-20").unwrap_err();
    assert_eq!(malformed, ActivationError::Lookup(LookupError::MalformedName));
    assert_eq!(malformed.to_string(), "Error fetching event data.");
}

#[test]
fn repeated_activation_is_deterministic() {
    let first = activate(200, "OK", SAMPLE_CATALOG_JSON, "swan-lake", "2025-02-14").unwrap();
    let second = activate(200, "OK", SAMPLE_CATALOG_JSON, "swan-lake", "2025-02-14").unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_scheduled_date_in_a_catalog_resolves() {
    let doc = catalog_with_event(
        "Summer Gala",
        &[("2025-07-01", "6 PM"), ("2025-07-02", "7 PM"), ("2025-07-03", "8 PM")],
    );
    let catalog = EventCatalog::from_json(&doc).unwrap();
    for detail in &catalog.events[0].event_details {
        let view = catalog.resolve("Summer-Gala", &detail.date).unwrap();
        assert_eq!(view.time, detail.time);
    }
}
