//! Event detail page: loader, save toggle, and the outbound purchase links.

pub(crate) mod view;
