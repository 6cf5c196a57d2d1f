//! Canonical JSON artifacts.
//!
//! One pretty-printed JSON array per record collection, named after the
//! collection.  These files are the contract between the validation stage and
//! the simulation engine; they are also convenient to diff and to inspect by
//! hand.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DataResult;
use crate::records::CanonicalSet;

pub const STATIONS_FILE: &str = "stations.json";
pub const SECTIONS_FILE: &str = "sections.json";
pub const TRAINS_FILE: &str = "trains.json";
pub const TIMETABLE_FILE: &str = "timetable.json";
pub const PLATFORMS_FILE: &str = "platforms.json";
pub const LOOPS_FILE: &str = "loops.json";

fn write_collection<T: Serialize>(dir: &Path, name: &str, rows: &[T]) -> DataResult<()> {
    let file = std::fs::File::create(dir.join(name))?;
    serde_json::to_writer_pretty(file, rows)?;
    Ok(())
}

fn read_collection<T: DeserializeOwned>(dir: &Path, name: &str) -> DataResult<Vec<T>> {
    let file = std::fs::File::open(dir.join(name))?;
    Ok(serde_json::from_reader(file)?)
}

impl CanonicalSet {
    /// Write all six canonical collections into `dir`.
    pub fn write_dir(&self, dir: &Path) -> DataResult<()> {
        write_collection(dir, STATIONS_FILE, &self.stations)?;
        write_collection(dir, SECTIONS_FILE, &self.sections)?;
        write_collection(dir, TRAINS_FILE, &self.trains)?;
        write_collection(dir, TIMETABLE_FILE, &self.timetable)?;
        write_collection(dir, PLATFORMS_FILE, &self.platforms)?;
        write_collection(dir, LOOPS_FILE, &self.loops)?;
        Ok(())
    }

    /// Read all six canonical collections from `dir`.
    pub fn read_dir(dir: &Path) -> DataResult<Self> {
        Ok(Self {
            stations:  read_collection(dir, STATIONS_FILE)?,
            sections:  read_collection(dir, SECTIONS_FILE)?,
            trains:    read_collection(dir, TRAINS_FILE)?,
            timetable: read_collection(dir, TIMETABLE_FILE)?,
            platforms: read_collection(dir, PLATFORMS_FILE)?,
            loops:     read_collection(dir, LOOPS_FILE)?,
        })
    }
}
