//! `rail-schedule` — train fleet and timetable model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`timetable`] | `TimetableStop`, `Schedule`                       |
//! | [`train`]     | `Train`                                           |
//! | [`loader`]    | `build_fleet`                                     |
//! | [`error`]     | `LoadError`, `LoadResult<T>`                      |
//!
//! A `Schedule` is a finite ordered visit list — stop order is the original
//! timetable row order, preserved end-to-end with no re-sorting.  The fleet
//! is a `BTreeMap` keyed by train id, so iterating it yields the stable
//! ascending-id order the simulation loop requires.

pub mod error;
pub mod loader;
pub mod timetable;
pub mod train;

#[cfg(test)]
mod tests;

pub use error::{LoadError, LoadResult};
pub use loader::build_fleet;
pub use timetable::{Schedule, TimetableStop};
pub use train::Train;
