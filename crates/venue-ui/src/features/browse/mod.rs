//! Catalog browsing (home) page.

pub(crate) mod view;
