//! The `EventWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult};

/// Trait implemented by the JSON, CSV, and SQLite writers.
pub trait EventWriter {
    /// Persist a batch of event rows, in order.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Flush and close the underlying artifact.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
