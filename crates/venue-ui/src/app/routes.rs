//! Routing definitions for the EventVenue UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/EventVenueV5")]
    Landing,
    #[at("/event/:event_name/:event_date")]
    Event {
        event_name: String,
        event_date: String,
    },
    #[at("/tickets/:event_name/:event_date")]
    Tickets {
        event_name: String,
        event_date: String,
    },
    #[at("/cart/:event_name/:event_date")]
    Cart {
        event_name: String,
        event_date: String,
    },
    #[at("/confirmation")]
    Confirmation,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub(crate) fn event(event_name: &str, event_date: &str) -> Self {
        Self::Event {
            event_name: event_name.to_string(),
            event_date: event_date.to_string(),
        }
    }

    pub(crate) fn tickets(event_name: &str, event_date: &str) -> Self {
        Self::Tickets {
            event_name: event_name.to_string(),
            event_date: event_date.to_string(),
        }
    }

    pub(crate) fn cart(event_name: &str, event_date: &str) -> Self {
        Self::Cart {
            event_name: event_name.to_string(),
            event_date: event_date.to_string(),
        }
    }
}
