//! Shared presentational components.

pub(crate) mod price_list;
pub(crate) mod save_button;
pub(crate) mod status;
