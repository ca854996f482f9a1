//! Save/unsave button state machine.
//!
//! # Design
//! - Purely local: no storage or network side effects, dropped with the view.
//! - Hover changes the label only, never the saved flag.
//! - A click labels from the state held before the flip.

/// Text shown on the save button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveLabel {
    /// "Save Event".
    #[default]
    SaveEvent,
    /// "Saved".
    Saved,
    /// "Unsave".
    Unsave,
}

impl SaveLabel {
    /// Button copy for the label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SaveEvent => "Save Event",
            Self::Saved => "Saved",
            Self::Unsave => "Unsave",
        }
    }
}

/// Observable phase combining the saved flag and pointer hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavePhase {
    /// Not saved, pointer elsewhere.
    Unsaved,
    /// Not saved, pointer over the button.
    UnsavedHovering,
    /// Saved, pointer elsewhere.
    Saved,
    /// Saved, pointer over the button.
    SavedHovering,
}

/// Saved flag, hover flag, and current label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveToggle {
    saved: bool,
    hovering: bool,
    label: SaveLabel,
}

impl SaveToggle {
    /// Unsaved, not hovered, labelled "Save Event".
    #[must_use]
    pub const fn new() -> Self {
        Self {
            saved: false,
            hovering: false,
            label: SaveLabel::SaveEvent,
        }
    }

    /// Flip the saved flag; the label follows the pre-click state.
    #[must_use]
    pub const fn click(self) -> Self {
        let was_saved = self.saved;
        Self {
            saved: !was_saved,
            label: if was_saved {
                SaveLabel::SaveEvent
            } else {
                SaveLabel::Saved
            },
            ..self
        }
    }

    /// Pointer entered the button.
    #[must_use]
    pub const fn pointer_enter(self) -> Self {
        Self {
            hovering: true,
            label: if self.saved {
                SaveLabel::Unsave
            } else {
                self.label
            },
            ..self
        }
    }

    /// Pointer left the button.
    #[must_use]
    pub const fn pointer_leave(self) -> Self {
        Self {
            hovering: false,
            label: if self.saved {
                SaveLabel::Saved
            } else {
                SaveLabel::SaveEvent
            },
            ..self
        }
    }

    /// Whether the event is currently marked as saved.
    #[must_use]
    pub const fn is_saved(self) -> bool {
        self.saved
    }

    /// Current button label.
    #[must_use]
    pub const fn label(self) -> SaveLabel {
        self.label
    }

    /// Combined saved/hover phase.
    #[must_use]
    pub const fn phase(self) -> SavePhase {
        match (self.saved, self.hovering) {
            (false, false) => SavePhase::Unsaved,
            (false, true) => SavePhase::UnsavedHovering,
            (true, false) => SavePhase::Saved,
            (true, true) => SavePhase::SavedHovering,
        }
    }

    /// Icon modifier class.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        if self.saved { "saved" } else { "unsaved" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_cycle_from_unsaved() {
        let toggle = SaveToggle::new();
        assert_eq!(toggle.label().as_str(), "Save Event");

        let toggle = toggle.click();
        assert!(toggle.is_saved());
        assert_eq!(toggle.label().as_str(), "Saved");

        let toggle = toggle.click();
        assert!(!toggle.is_saved());
        assert_eq!(toggle.label().as_str(), "Save Event");
    }

    #[test]
    fn hover_over_saved_offers_unsave_then_reverts() {
        let toggle = SaveToggle::new().click();
        let hovered = toggle.pointer_enter();
        assert_eq!(hovered.label(), SaveLabel::Unsave);
        assert!(hovered.is_saved());
        assert_eq!(hovered.phase(), SavePhase::SavedHovering);

        let left = hovered.pointer_leave();
        assert_eq!(left.label(), SaveLabel::Saved);
        assert_eq!(left.phase(), SavePhase::Saved);
    }

    #[test]
    fn hover_over_unsaved_keeps_label() {
        let hovered = SaveToggle::new().pointer_enter();
        assert_eq!(hovered.label(), SaveLabel::SaveEvent);
        assert_eq!(hovered.phase(), SavePhase::UnsavedHovering);
        assert_eq!(hovered.pointer_leave().phase(), SavePhase::Unsaved);
    }

    #[test]
    fn click_while_hovering_saved_shows_save_event_immediately() {
        let toggle = SaveToggle::new().pointer_enter().click().pointer_enter();
        assert_eq!(toggle.label(), SaveLabel::Unsave);

        let clicked = toggle.click();
        assert!(!clicked.is_saved());
        assert_eq!(clicked.label(), SaveLabel::SaveEvent);
        assert_eq!(clicked.phase(), SavePhase::UnsavedHovering);
        assert_eq!(clicked.icon_class(), "unsaved");
    }

    #[test]
    fn click_while_hovering_unsaved_shows_saved() {
        let clicked = SaveToggle::new().pointer_enter().click();
        assert_eq!(clicked.label(), SaveLabel::Saved);
        assert_eq!(clicked.phase(), SavePhase::SavedHovering);
        assert_eq!(clicked.icon_class(), "saved");
    }
}
