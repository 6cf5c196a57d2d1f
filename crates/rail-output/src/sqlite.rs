//! SQLite output backend (feature `sqlite`).
//!
//! Creates `<run_id>_events.db` with a single `events` table.  `seq`
//! preserves emission order so consumers can reconstruct the exact log
//! sequence with an `ORDER BY seq`.

use std::path::Path;

use rusqlite::Connection;

use rail_sim::RunId;

use crate::writer::EventWriter;
use crate::{EventRow, OutputResult};

/// Writes the event log to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `<run_id>_events.db` in `dir` and initialise the
    /// schema.
    pub fn create(dir: &Path, run_id: &RunId) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(format!("{run_id}_events.db")))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 seq          INTEGER PRIMARY KEY AUTOINCREMENT,
                 time         TEXT NOT NULL,
                 train_id     TEXT NOT NULL,
                 event        TEXT NOT NULL,
                 station_code TEXT,
                 section_id   TEXT
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl EventWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (time, train_id, event, station_code, section_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.time,
                    row.train_id,
                    row.event,
                    row.station_code,
                    row.section_id,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
