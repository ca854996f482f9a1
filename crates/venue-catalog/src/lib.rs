#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Event catalog primitives shared by the EventVenue front-end and CLI.
//!
//! The catalog is a static JSON document (`events-mock-data.json`) that is
//! fetched wholesale on every view activation. This crate owns everything that
//! does not need a DOM or a network stack:
//! - `model`: serde types for the document and the merged [`EventView`] projection.
//! - `lookup`: route-parameter normalisation and the event/date resolution rules.
//! - `response`: HTTP status classification and body decoding.
//! - `error`: typed failures whose `Display` output is the user-facing copy.

pub mod error;
pub mod lookup;
pub mod model;
pub mod response;

pub use error::{ActivationError, CatalogError, LookupError};
pub use lookup::{decode_route_name, display_name, normalize_event_name, route_name};
pub use model::{Event, EventCatalog, EventDetail, EventView, PriceSheet, format_price};
pub use response::{check_status, decode_catalog, read_catalog_response};

/// File name of the bundled catalog document served next to the app.
pub const CATALOG_FILE_NAME: &str = "events-mock-data.json";
