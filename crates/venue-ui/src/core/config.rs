//! Catalog location resolution.

use venue_catalog::CATALOG_FILE_NAME;

/// `<meta name=...>` tag that overrides the catalog URL.
pub const CATALOG_URL_META: &str = "venue-catalog-url";

/// Pick the catalog URL from an optional meta override and the page origin.
///
/// A blank override is ignored; otherwise it is used verbatim (relative URLs
/// resolve against the page like any fetch).
#[must_use]
pub fn resolve_catalog_url(meta_override: Option<&str>, origin: &str) -> String {
    if let Some(url) = meta_override.map(str::trim).filter(|url| !url.is_empty()) {
        return url.to_string();
    }
    format!("{}/{CATALOG_FILE_NAME}", origin.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_default_points_at_bundled_file() {
        assert_eq!(
            resolve_catalog_url(None, "http://localhost:8080"),
            "http://localhost:8080/events-mock-data.json"
        );
        assert_eq!(
            resolve_catalog_url(Some("  "), "https://venue.example/"),
            "https://venue.example/events-mock-data.json"
        );
    }

    #[test]
    fn meta_override_wins() {
        assert_eq!(
            resolve_catalog_url(Some("/EventVenueV5/events-mock-data.json"), "http://x"),
            "/EventVenueV5/events-mock-data.json"
        );
    }
}
