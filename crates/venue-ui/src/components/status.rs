//! Loading and error placeholders shared by catalog-backed pages.

use crate::core::view_state::{LOADING_TEXT, ViewState};
use yew::prelude::*;

/// Render the non-loaded states; `None` means the page should render its data.
pub(crate) fn pending_view<T>(state: &ViewState<T>) -> Option<Html> {
    match state {
        ViewState::Loading => Some(html! { <p class="status-loading">{LOADING_TEXT}</p> }),
        ViewState::Error(message) => Some(html! { <p class="status-error">{message.clone()}</p> }),
        ViewState::Loaded(_) => None,
    }
}
