//! `rail-core` — foundational types for the railsim workspace.
//!
//! This crate is a dependency of every other `rail-*` crate.  It intentionally
//! has no `rail-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                             |
//! |-----------|------------------------------------------------------|
//! | [`ids`]   | `StationCode`, `SectionId`, `TrainId`                |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`, `DayTime`           |
//! | [`error`] | `RailError`, `RailResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RailError, RailResult};
pub use ids::{SectionId, StationCode, TrainId};
pub use time::{DayTime, SimClock, SimConfig, Tick};
