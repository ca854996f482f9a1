//! Core, DOM-free primitives for the Web UI.
pub mod activation;
pub mod config;
pub mod save_toggle;
pub mod view_state;
