//! Catalog-backed page loaders.
//!
//! # Design
//! - Each activation moves to `Loading`, issues one catalog fetch, and ends in
//!   `Error` or `Loaded`; nothing is retried or cached.
//! - The effect teardown cancels the activation so a late response for an
//!   old (name, date) pair never overwrites the current page.
//! - Failures are logged to the console with their diagnostic detail.

use std::rc::Rc;

use gloo::console;
use venue_catalog::{ActivationError, EventCatalog, EventView};
use yew::prelude::*;

use crate::app::api::CatalogCtx;
use crate::app::preferences::catalog_url;
use crate::core::activation::Activation;
use crate::core::view_state::ViewState;
use crate::services::catalog::CatalogClient;

/// Resolve a route's (name, date) pair into the detail projection.
#[hook]
pub(crate) fn use_event_view(event_name: String, event_date: String) -> ViewState<EventView> {
    let client = use_catalog_client();
    let state = use_state(ViewState::<EventView>::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(event_name, event_date): &(String, String)| {
                let event_name = event_name.clone();
                let event_date = event_date.clone();
                let activation = activate(client, state, move |catalog| {
                    Ok(catalog.resolve(&event_name, &event_date)?)
                });
                move || activation.cancel()
            },
            (event_name, event_date),
        );
    }
    (*state).clone()
}

/// Load the whole catalog for listing pages.
#[hook]
pub(crate) fn use_catalog() -> ViewState<EventCatalog> {
    let client = use_catalog_client();
    let state = use_state(ViewState::<EventCatalog>::default);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let activation = activate(client, state, Ok);
                move || activation.cancel()
            },
            (),
        );
    }
    (*state).clone()
}

#[hook]
fn use_catalog_client() -> Rc<CatalogClient> {
    use_context::<CatalogCtx>().map_or_else(
        || Rc::new(CatalogClient::new(catalog_url())),
        |ctx| ctx.client,
    )
}

fn activate<T, F>(
    client: Rc<CatalogClient>,
    state: UseStateHandle<ViewState<T>>,
    project: F,
) -> Activation
where
    T: 'static,
    F: FnOnce(EventCatalog) -> Result<T, ActivationError> + 'static,
{
    if !state.is_loading() {
        state.set(ViewState::Loading);
    }
    let activation = Activation::begin();
    let pending = activation.clone();
    yew::platform::spawn_local(async move {
        let result = match client.fetch_catalog().await {
            Ok(catalog) => project(catalog),
            Err(err) => Err(ActivationError::from(err)),
        };
        if let Err(err) = &result {
            log_activation_error(err);
        }
        let applied = pending.deliver(ViewState::from_result(result), |next| state.set(next));
        if !applied {
            console::debug!("discarded catalog response for a superseded activation");
        }
    });
    activation
}

fn log_activation_error(err: &ActivationError) {
    match err {
        ActivationError::Catalog(catalog) => {
            console::error!("Error fetching data:", err.to_string(), catalog.detail());
        }
        ActivationError::Lookup(_) => console::warn!("event lookup failed:", err.to_string()),
    }
}
