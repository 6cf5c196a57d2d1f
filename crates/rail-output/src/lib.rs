//! `rail-output` — event-log persistence for the railsim workspace.
//!
//! Backends behind Cargo features:
//!
//! | Feature  | Backend | File created             |
//! |----------|---------|--------------------------|
//! | *(none)* | JSON    | `<run_id>_events.json`   |
//! | *(none)* | CSV     | `<run_id>_events.csv`    |
//! | `sqlite` | SQLite  | `<run_id>_events.db`     |
//!
//! All backends implement [`EventWriter`] and persist [`EventRow`]s — the
//! serialized form of engine events, with tick timestamps rendered as
//! "HH:MM" elapsed from run start.  Artifacts are named by the run's unique
//! identifier, so successive runs never overwrite each other.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rail_output::{write_run, CsvWriter, EventRow, EventWriter};
//!
//! // One-liner for the common case:
//! let path = write_run(Path::new("./logs"), &sim)?;
//!
//! // Or pick a backend explicitly:
//! let rows = EventRow::from_log(sim.events(), &sim.clock);
//! let mut writer = CsvWriter::create(Path::new("./logs"), sim.run_id())?;
//! writer.write_events(&rows)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


use std::path::{Path, PathBuf};

use rail_sim::Sim;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use row::EventRow;
pub use writer::EventWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

/// Persist a finished run's event log as JSON into `dir`.
///
/// Returns the path of the written artifact.
pub fn write_run(dir: &Path, sim: &Sim) -> OutputResult<PathBuf> {
    let rows = EventRow::from_log(sim.events(), &sim.clock);
    let mut writer = JsonWriter::create(dir, sim.run_id())?;
    let path = writer.path().to_owned();
    writer.write_events(&rows)?;
    writer.finish()?;
    Ok(path)
}
