//! Environment helpers for the app shell.

use crate::core::config::{CATALOG_URL_META, resolve_catalog_url};
use gloo::console;
use gloo::utils::{document, window};

/// Catalog URL from the `venue-catalog-url` meta tag, else `<origin>/events-mock-data.json`.
pub(crate) fn catalog_url() -> String {
    let origin = window().location().origin().unwrap_or_else(|err| {
        console::error!("window origin unavailable", err);
        String::new()
    });
    resolve_catalog_url(meta_content(CATALOG_URL_META).as_deref(), &origin)
}

fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{name}\"]");
    document()
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
