use venue_catalog::display_name;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::price_list::PriceList;
use crate::components::status::pending_view;
use crate::core::view_state::ViewState;
use crate::features::loader::use_event_view;

#[derive(Properties, PartialEq)]
pub(crate) struct PurchasePageProps {
    pub(crate) event_name: AttrValue,
    pub(crate) event_date: AttrValue,
}

#[function_component(TicketsPage)]
pub(crate) fn tickets_page(props: &PurchasePageProps) -> Html {
    let state = use_event_view(props.event_name.to_string(), props.event_date.to_string());
    if let Some(pending) = pending_view(&state) {
        return pending;
    }
    let ViewState::Loaded(view) = state else {
        return Html::default();
    };

    html! {
        <section class="tickets-page">
            <h1>{format!("Tickets: {}", display_name(&view.event_name))}</h1>
            <p>{format!("{} at {}", view.date, view.time)}</p>
            <PriceList prices={view.ticket_prices} />
            <div class="event-actions">
                <Link<Route> to={Route::event(&props.event_name, &props.event_date)}>
                    {"Back to Event"}
                </Link<Route>>
                <Link<Route> to={Route::cart(&props.event_name, &props.event_date)}>
                    {"Continue to Cart"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(CartPage)]
pub(crate) fn cart_page(props: &PurchasePageProps) -> Html {
    let state = use_event_view(props.event_name.to_string(), props.event_date.to_string());
    if let Some(pending) = pending_view(&state) {
        return pending;
    }
    let ViewState::Loaded(view) = state else {
        return Html::default();
    };

    html! {
        <section class="cart-page">
            <h1>{"Your Cart"}</h1>
            <p>{display_name(&view.event_name)}</p>
            <p>{format!("{} at {}", view.date, view.time)}</p>
            <div class="event-actions">
                <Link<Route> to={Route::tickets(&props.event_name, &props.event_date)}>
                    {"Back to Tickets"}
                </Link<Route>>
                <Link<Route> to={Route::Confirmation}>{"Checkout"}</Link<Route>>
            </div>
        </section>
    }
}

#[function_component(ConfirmationPage)]
pub(crate) fn confirmation_page() -> Html {
    html! {
        <section class="confirmation-page">
            <h1>{"Thank you for your purchase!"}</h1>
            <Link<Route> to={Route::Home}>{"Browse more events"}</Link<Route>>
        </section>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <section class="not-found-page">
            <h1>{"Page not found."}</h1>
            <Link<Route> to={Route::Home}>{"Back to events"}</Link<Route>>
        </section>
    }
}
