//! HTTP client helpers.

pub(crate) mod catalog;
