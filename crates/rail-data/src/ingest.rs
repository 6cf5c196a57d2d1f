//! Raw CSV ingestion.
//!
//! Raw exports use legacy column names; ingestion renames them into the
//! canonical schema:
//!
//! | File           | Raw column        | Canonical column   |
//! |----------------|-------------------|--------------------|
//! | stations.csv   | `station_id`      | `station_code`     |
//! |                | `name`            | `station_name`     |
//! |                | `platform_count`  | `no_of_platforms`  |
//! |                | `track_count`     | `no_of_tracks`     |
//! | sections.csv   | `single_or_double`| `track_type`       |
//! | trains.csv     | `name`            | `train_name`       |
//! |                | `priority_wt`     | `priority`         |
//! | timetable.csv  | `station_id`      | `station_code`     |
//! |                | `sched_arrival`   | `arr_time`         |
//! |                | `sched_departure` | `dep_time`         |
//! | platforms.csv  | `station_id`      | `station_code`     |
//! | loops.csv      | `station_id`      | `station_code`     |
//!
//! Every collection has a `read_*_reader` function accepting any `Read`
//! source (pass a `std::io::Cursor` in tests) and `ingest_dir` reads the six
//! files of a raw export directory.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rail_core::{SectionId, StationCode, TrainId};

use crate::error::DataResult;
use crate::records::{
    CanonicalSet, LoopRecord, PlatformRecord, SectionRecord, StationRecord, TimetableStopRecord,
    TrainRecord,
};

// ── Raw CSV rows (legacy column names) ────────────────────────────────────────

#[derive(Deserialize)]
struct RawStation {
    station_id:     String,
    name:           String,
    platform_count: u32,
    track_count:    u32,
}

#[derive(Deserialize)]
struct RawSection {
    section_id:       String,
    from_station:     String,
    to_station:       String,
    length_km:        f64,
    max_speed_kmph:   f64,
    electrified:      bool,
    single_or_double: String,
}

#[derive(Deserialize)]
struct RawTrain {
    train_id:         String,
    name:             Option<String>,
    #[serde(rename = "type")]
    kind:             Option<String>,
    priority_wt:      Option<f64>,
    length_m:         f64,
    seats_or_tonnage: Option<f64>,
    accel_mps2:       Option<f64>,
    decel_mps2:       Option<f64>,
    speed_class_kmph: f64,
    dwell_std_min:    Option<f64>,
}

#[derive(Deserialize)]
struct RawTimetableStop {
    train_id:        String,
    station_id:      String,
    sched_arrival:   Option<String>,
    sched_departure: Option<String>,
    dwell_min:       Option<i64>,
}

#[derive(Deserialize)]
struct RawPlatform {
    station_id:  String,
    platform_id: String,
    length_m:    f64,
}

#[derive(Deserialize)]
struct RawLoop {
    station_id: String,
    loop_id:    String,
    length_m:   f64,
}

// ── Per-collection readers ────────────────────────────────────────────────────

/// Read and canonicalize station rows from any CSV source.
pub fn read_stations_reader<R: Read>(reader: R) -> DataResult<Vec<StationRecord>> {
    csv::Reader::from_reader(reader)
        .deserialize::<RawStation>()
        .map(|row| {
            let row = row?;
            Ok(StationRecord {
                station_code:    StationCode(row.station_id),
                station_name:    row.name,
                no_of_platforms: row.platform_count,
                no_of_tracks:    row.track_count,
            })
        })
        .collect()
}

/// Read and canonicalize section rows from any CSV source.
pub fn read_sections_reader<R: Read>(reader: R) -> DataResult<Vec<SectionRecord>> {
    csv::Reader::from_reader(reader)
        .deserialize::<RawSection>()
        .map(|row| {
            let row = row?;
            Ok(SectionRecord {
                section_id:     SectionId(row.section_id),
                from_station:   StationCode(row.from_station),
                to_station:     StationCode(row.to_station),
                length_km:      row.length_km,
                max_speed_kmph: row.max_speed_kmph,
                electrified:    row.electrified,
                track_type:     row.single_or_double,
            })
        })
        .collect()
}

/// Read and canonicalize train rows from any CSV source.
pub fn read_trains_reader<R: Read>(reader: R) -> DataResult<Vec<TrainRecord>> {
    csv::Reader::from_reader(reader)
        .deserialize::<RawTrain>()
        .map(|row| {
            let row = row?;
            Ok(TrainRecord {
                train_id:         TrainId(row.train_id),
                train_name:       row.name,
                kind:             row.kind,
                priority:         row.priority_wt,
                length_m:         row.length_m,
                seats_or_tonnage: row.seats_or_tonnage,
                accel_mps2:       row.accel_mps2,
                decel_mps2:       row.decel_mps2,
                speed_class_kmph: row.speed_class_kmph,
                dwell_std_min:    row.dwell_std_min,
            })
        })
        .collect()
}

/// Read and canonicalize timetable rows from any CSV source.
///
/// Row order is preserved verbatim — it is the visiting order of each train.
pub fn read_timetable_reader<R: Read>(reader: R) -> DataResult<Vec<TimetableStopRecord>> {
    csv::Reader::from_reader(reader)
        .deserialize::<RawTimetableStop>()
        .map(|row| {
            let row = row?;
            Ok(TimetableStopRecord {
                train_id:     TrainId(row.train_id),
                station_code: StationCode(row.station_id),
                arr_time:     row.sched_arrival,
                dep_time:     row.sched_departure,
                dwell_min:    row.dwell_min,
            })
        })
        .collect()
}

/// Read and canonicalize platform rows from any CSV source.
pub fn read_platforms_reader<R: Read>(reader: R) -> DataResult<Vec<PlatformRecord>> {
    csv::Reader::from_reader(reader)
        .deserialize::<RawPlatform>()
        .map(|row| {
            let row = row?;
            Ok(PlatformRecord {
                station_code: StationCode(row.station_id),
                platform_id:  row.platform_id,
                length_m:     row.length_m,
            })
        })
        .collect()
}

/// Read and canonicalize loop rows from any CSV source.
pub fn read_loops_reader<R: Read>(reader: R) -> DataResult<Vec<LoopRecord>> {
    csv::Reader::from_reader(reader)
        .deserialize::<RawLoop>()
        .map(|row| {
            let row = row?;
            Ok(LoopRecord {
                station_code: StationCode(row.station_id),
                loop_id:      row.loop_id,
                length_m:     row.length_m,
            })
        })
        .collect()
}

// ── Directory ingestion ───────────────────────────────────────────────────────

/// Read the six raw CSVs of an export directory into a [`CanonicalSet`].
///
/// Expects `stations.csv`, `sections.csv`, `trains.csv`, `timetable.csv`,
/// `platforms.csv`, and `loops.csv` under `raw_dir`.
pub fn ingest_dir(raw_dir: &Path) -> DataResult<CanonicalSet> {
    let open = |name: &str| std::fs::File::open(raw_dir.join(name));

    Ok(CanonicalSet {
        stations:  read_stations_reader(open("stations.csv")?)?,
        sections:  read_sections_reader(open("sections.csv")?)?,
        trains:    read_trains_reader(open("trains.csv")?)?,
        timetable: read_timetable_reader(open("timetable.csv")?)?,
        platforms: read_platforms_reader(open("platforms.csv")?)?,
        loops:     read_loops_reader(open("loops.csv")?)?,
    })
}
