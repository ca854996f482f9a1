//! "Save Event" toggle button.
//!
//! # Design
//! - Stateless: the owning page holds the `SaveToggle` and feeds it back in.
//! - Pointer enter/leave only affect the label.

use crate::core::save_toggle::SaveToggle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SaveButtonProps {
    pub(crate) toggle: SaveToggle,
    pub(crate) on_change: Callback<SaveToggle>,
}

#[function_component(SaveEventButton)]
pub(crate) fn save_event_button(props: &SaveButtonProps) -> Html {
    let toggle = props.toggle;
    let onclick = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(toggle.click()))
    };
    let onmouseenter = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(toggle.pointer_enter()))
    };
    let onmouseleave = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(toggle.pointer_leave()))
    };

    html! {
        <button
            type="button"
            class="save-event-button"
            aria-pressed={toggle.is_saved().to_string()}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            <BookmarkIcon class={classes!("save-icon", toggle.icon_class())} />
            {toggle.label().as_str()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct BookmarkIconProps {
    #[prop_or_default]
    class: Classes,
}

#[function_component(BookmarkIcon)]
fn bookmark_icon(props: &BookmarkIconProps) -> Html {
    html! {
        <svg
            class={props.class.clone()}
            width="1em"
            height="1em"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path
                d="M6 3h12a1 1 0 0 1 1 1v17l-7-4-7 4V4a1 1 0 0 1 1-1z"
                fill="currentColor"
            />
        </svg>
    }
}
