//! Home page listing every event and its scheduled dates.

use venue_catalog::{Event, route_name};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::status::pending_view;
use crate::core::view_state::ViewState;
use crate::features::loader::use_catalog;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let state = use_catalog();
    if let Some(pending) = pending_view(&state) {
        return pending;
    }
    let ViewState::Loaded(catalog) = state else {
        return Html::default();
    };
    if catalog.is_empty() {
        return html! { <p class="muted">{"No upcoming events."}</p> };
    }

    html! {
        <section class="event-list">
            <h1>{"Upcoming Events"}</h1>
            { for catalog.events.iter().map(render_event) }
        </section>
    }
}

fn render_event(event: &Event) -> Html {
    let token = route_name(&event.event_name);
    html! {
        <article class="event-card" key={event.event_name.clone()}>
            <h2>{event.event_name.clone()}</h2>
            <p>{event.description.clone()}</p>
            <ul class="event-dates">
                { for event.event_details.iter().map(|detail| html! {
                    <li key={detail.date.clone()}>
                        <Link<Route> to={Route::event(&token, &detail.date)}>
                            {format!("{} at {}", detail.date, detail.time)}
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </article>
    }
}
