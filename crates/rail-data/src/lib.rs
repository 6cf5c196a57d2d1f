//! `rail-data` — the ingestion and validation stage.
//!
//! Reads raw tabular exports (stations, sections, trains, timetable,
//! platforms, loops), renames their fields into the canonical schema, runs
//! data-quality checks, and emits canonical JSON artifacts plus a
//! human-readable quality report.
//!
//! Validation never halts ingestion: problem rows are exported as-is and
//! accumulated into the report, leaving the fix-or-proceed decision to the
//! operator.  The simulation engine consumes the canonical records without
//! re-validating them.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`records`] | Canonical record structs, `CanonicalSet`                |
//! | [`ingest`]  | Raw CSV readers with canonical field renames            |
//! | [`quality`] | `validate`, `Finding`, `QualityReport`                  |
//! | [`canon`]   | Canonical JSON export/import                            |
//! | [`error`]   | `DataError`, `DataResult<T>`                            |

pub mod canon;
pub mod error;
pub mod ingest;
pub mod quality;
pub mod records;


pub use error::{DataError, DataResult};
pub use ingest::ingest_dir;
pub use quality::{validate, Finding, QualityReport};
pub use records::{
    CanonicalSet, LoopRecord, PlatformRecord, SectionRecord, StationRecord, TimetableStopRecord,
    TrainRecord,
};
