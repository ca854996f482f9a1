//! Catalog retrieval over `fetch`.

use gloo::console;
use gloo_net::http::Request;
use venue_catalog::{CatalogError, EventCatalog, check_status, decode_catalog};

#[derive(Clone, Debug)]
pub(crate) struct CatalogClient {
    pub(crate) url: String,
}

impl CatalogClient {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Issue exactly one `GET` for the whole catalog document.
    pub(crate) async fn fetch_catalog(&self) -> Result<EventCatalog, CatalogError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|err| CatalogError::transport(err.to_string()))?;
        check_status(response.status(), &response.status_text())?;
        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::transport(err.to_string()))?;
        let catalog = decode_catalog(&body)?;
        console::log!(format!(
            "Data fetched: {} events from {}",
            catalog.len(),
            self.url
        ));
        Ok(catalog)
    }
}
