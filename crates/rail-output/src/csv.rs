//! CSV output backend.
//!
//! Creates `<run_id>_events.csv` with a fixed five-column header.  Optional
//! fields are written as empty cells.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use rail_sim::RunId;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

/// Writes the event log as a CSV file.
pub struct CsvWriter {
    out: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `<run_id>_events.csv` in `dir` and write the header.
    pub fn create(dir: &Path, run_id: &RunId) -> OutputResult<Self> {
        let mut out = Writer::from_path(dir.join(format!("{run_id}_events.csv")))?;
        out.write_record(["time", "train_id", "event", "station_code", "section_id"])?;
        Ok(Self { out, finished: false })
    }
}

impl EventWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.out.write_record([
                row.time.as_str(),
                row.train_id.as_str(),
                row.event.as_str(),
                row.station_code.as_deref().unwrap_or(""),
                row.section_id.as_deref().unwrap_or(""),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
