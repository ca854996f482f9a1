use crate::app::api::CatalogCtx;
use crate::features::browse::view::HomePage;
use crate::features::event_detail::view::EventPage;
use crate::features::purchase::view::{CartPage, ConfirmationPage, NotFoundPage, TicketsPage};
use preferences::catalog_url;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

#[function_component(VenueApp)]
pub(crate) fn venue_app() -> Html {
    let catalog_ctx = use_memo(|_| CatalogCtx::new(catalog_url()), ());

    html! {
        <ContextProvider<CatalogCtx> context={(*catalog_ctx).clone()}>
            <BrowserRouter>
                <main class="venue-main">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<CatalogCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Landing => html! { <HomePage /> },
        Route::Event {
            event_name,
            event_date,
        } => html! { <EventPage event_name={event_name} event_date={event_date} /> },
        Route::Tickets {
            event_name,
            event_date,
        } => html! { <TicketsPage event_name={event_name} event_date={event_date} /> },
        Route::Cart {
            event_name,
            event_date,
        } => html! { <CartPage event_name={event_name} event_date={event_date} /> },
        Route::Confirmation => html! { <ConfirmationPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VenueApp>::with_root(root).render();
    } else {
        yew::Renderer::<VenueApp>::new().render();
    }
}
