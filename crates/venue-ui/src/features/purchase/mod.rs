//! Ticket, cart, and confirmation pages of the purchase flow.
//!
//! # Design
//! - No quantities, totals, or payment; each page only re-resolves the event
//!   so the flow's links land on real data.

pub(crate) mod view;
