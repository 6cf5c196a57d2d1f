//! `rail-net` — the static rail infrastructure model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`network`] | `Station`, `Section`, `TrackType`, `RailNetwork`      |
//! | [`travel`]  | `estimate_travel`, `TravelEstimate`                   |
//! | [`error`]   | `TravelError`, `TravelResult<T>`                      |
//!
//! Stations and sections are immutable after load and shared read-only for
//! the duration of a simulation run.  Lookup tables are `BTreeMap`s keyed by
//! their natural identifier: iteration order is always ascending key order,
//! never incidental insertion order.

pub mod error;
pub mod network;
pub mod travel;

#[cfg(test)]
mod tests;

pub use error::{TravelError, TravelResult};
pub use network::{RailNetwork, Section, Station, TrackType};
pub use travel::{estimate_travel, TravelEstimate, FALLBACK_TRAVEL_MIN};
