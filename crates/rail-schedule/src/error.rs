//! Error types for rail-schedule.

use thiserror::Error;

use rail_core::TrainId;

/// Errors raised while materializing the fleet from canonical records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A timetable row references a train with no matching train record.
    /// This is surfaced rather than silently dropped; the caller decides
    /// whether to repair the data or abort.
    #[error("timetable references unknown train {0}")]
    UnknownTrain(TrainId),

    #[error("timetable parse error: {0}")]
    Parse(String),
}

/// Alias for `Result<T, LoadError>`.
pub type LoadResult<T> = Result<T, LoadError>;
