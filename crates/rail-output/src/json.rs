//! JSON output backend.
//!
//! Writes one pretty-printed array of event rows to `<run_id>_events.json` —
//! the same artifact shape downstream conformance tooling already consumes.
//! Rows are buffered and the file is written at `finish()`, since a JSON
//! array cannot be streamed incrementally and re-opened safely.

use std::path::{Path, PathBuf};

use rail_sim::RunId;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

/// Writes the event log as a single JSON array.
pub struct JsonWriter {
    path: PathBuf,
    rows: Vec<EventRow>,
    finished: bool,
}

impl JsonWriter {
    /// Target `<run_id>_events.json` inside `dir`.  The file itself is
    /// created at `finish()`.
    pub fn create(dir: &Path, run_id: &RunId) -> OutputResult<Self> {
        Ok(Self {
            path: dir.join(format!("{run_id}_events.json")),
            rows: Vec::new(),
            finished: false,
        })
    }

    /// The artifact path this writer targets.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventWriter for JsonWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        self.rows.extend_from_slice(rows);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &self.rows)?;
        Ok(())
    }
}
