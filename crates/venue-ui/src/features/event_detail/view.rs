//! Event detail view.
//!
//! # Design
//! - Hooks run unconditionally; rendering branches on the single `ViewState`.
//! - The save toggle lives in page memory only and survives re-activation
//!   until the page unmounts.
//! - Cart and ticket links reuse the route pair exactly as received.

use venue_catalog::{EventView, display_name};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::price_list::PriceList;
use crate::components::save_button::SaveEventButton;
use crate::components::status::pending_view;
use crate::core::save_toggle::SaveToggle;
use crate::core::view_state::ViewState;
use crate::features::loader::use_event_view;

#[derive(Properties, PartialEq)]
pub(crate) struct EventPageProps {
    pub(crate) event_name: AttrValue,
    pub(crate) event_date: AttrValue,
}

#[function_component(EventPage)]
pub(crate) fn event_page(props: &EventPageProps) -> Html {
    let state = use_event_view(props.event_name.to_string(), props.event_date.to_string());
    let toggle = use_state(SaveToggle::new);
    let on_toggle = {
        let toggle = toggle.clone();
        Callback::from(move |next: SaveToggle| toggle.set(next))
    };

    if let Some(pending) = pending_view(&state) {
        return pending;
    }
    let ViewState::Loaded(view) = state else {
        return Html::default();
    };

    html! {
        <div class="event-page">
            {render_details(&view)}
            <div class="event-actions">
                <Link<Route> to={Route::cart(&props.event_name, &props.event_date)}>
                    <button type="button" class="action-button">{"Go Back"}</button>
                </Link<Route>>
                <Link<Route> to={Route::tickets(&props.event_name, &props.event_date)}>
                    <button type="button" class="action-button">{"Buy Tickets!"}</button>
                </Link<Route>>
                <SaveEventButton toggle={*toggle} on_change={on_toggle} />
            </div>
        </div>
    }
}

fn render_details(view: &EventView) -> Html {
    html! {
        <>
            <h1 class="event-title">{display_name(&view.event_name)}</h1>
            <h3>{"Description:"}</h3>
            <p>{view.description.clone()}</p>
            <h3>{"Date:"}</h3>
            <p>{view.date.clone()}</p>
            <h3>{"Time:"}</h3>
            <p>{view.time.clone()}</p>
            <h3>{"Ticket Prices:"}</h3>
            <PriceList prices={view.ticket_prices} />
        </>
    }
}
