//! Feature slices: each page owns its view and reuses the shared catalog loader.

pub(crate) mod browse;
pub(crate) mod event_detail;
pub(crate) mod loader;
pub(crate) mod purchase;
