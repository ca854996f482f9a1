//! Command handlers grouped by concern.

mod list;
mod show;

pub(crate) use list::handle_list;
pub(crate) use show::handle_show;
