//! Renderers for catalog listings and resolved events.

use anyhow::anyhow;
use serde::Serialize;
use venue_catalog::{EventCatalog, EventView, format_price, route_name};

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingEntry<'a> {
    event_name: &'a str,
    route_name: String,
    dates: Vec<&'a str>,
}

pub(crate) fn render_event_list(catalog: &EventCatalog, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<ListingEntry<'_>> = catalog
                .events
                .iter()
                .map(|event| ListingEntry {
                    event_name: &event.event_name,
                    route_name: route_name(&event.event_name),
                    dates: event.dates().collect(),
                })
                .collect();
            to_json(&entries)
        }
        OutputFormat::Table => {
            if catalog.is_empty() {
                return Ok("No events in catalog.\n".to_string());
            }
            let lines: Vec<String> = catalog
                .events
                .iter()
                .flat_map(|event| {
                    let heading =
                        format!("{} ({})", event.event_name, route_name(&event.event_name));
                    let dates = event
                        .event_details
                        .iter()
                        .map(|detail| format!("  {}  {}", detail.date, detail.time));
                    std::iter::once(heading).chain(dates)
                })
                .collect();
            Ok(join_lines(&lines))
        }
    }
}

pub(crate) fn render_event_view(view: &EventView, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(view),
        OutputFormat::Table => {
            let mut lines = vec![
                view.event_name.clone(),
                format!("description: {}", view.description),
                format!("date: {}", view.date),
                format!("time: {}", view.time),
                "ticket prices:".to_string(),
            ];
            lines.extend(
                view.ticket_prices
                    .tiers()
                    .into_iter()
                    .map(|(tier, price)| format!("  {tier}: {}", format_price(price))),
            );
            Ok(join_lines(&lines))
        }
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut text| {
            text.push('\n');
            text
        })
        .map_err(|err| CliError::failure(anyhow!("failed to render JSON: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use venue_test_support::fixtures::SAMPLE_CATALOG_JSON;

    fn sample() -> EventCatalog {
        EventCatalog::from_json(SAMPLE_CATALOG_JSON).expect("fixture decodes")
    }

    #[test]
    fn table_listing_shows_route_names_and_dates() {
        let text = render_event_list(&sample(), OutputFormat::Table).unwrap();
        assert!(text.starts_with("The Nutcracker (The-Nutcracker)\n"));
        assert!(text.contains("  2024-12-21  2:00 PM\n"));
        assert!(text.contains("Jazz Under the Stars (Jazz-Under-the-Stars)"));
    }

    #[test]
    fn empty_listing_says_so() {
        let text = render_event_list(&EventCatalog::default(), OutputFormat::Table).unwrap();
        assert_eq!(text, "No events in catalog.\n");
    }

    #[test]
    fn json_listing_is_machine_readable() {
        let text = render_event_list(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["routeName"], "The-Nutcracker");
        assert_eq!(value[0]["dates"][1], "2024-12-21");
    }

    #[test]
    fn table_view_lists_price_tiers_in_order() {
        let view = sample().resolve("Jazz-Under-the-Stars", "2025-06-07").unwrap();
        let text = render_event_view(&view, OutputFormat::Table).unwrap();
        let expected = "Jazz Under the Stars\n\
            description: An evening of standards and new arrangements from the house big band.\n\
            date: 2025-06-07\n\
            time: 9:30 PM\n\
            ticket prices:\n  \
            Box: $80\n  \
            Orchestra: $65\n  \
            Main Floor: $49.5\n  \
            Balcony: $25\n";
        assert_eq!(text, expected);
    }
}
