//! Fleet loader: canonical records → lookup-ready `Train` table.
//!
//! Timetable rows are grouped by train id with their original row order
//! preserved (the visiting order).  Trains absent from the timetable get an
//! empty schedule; a timetable row referencing an unknown train fails the
//! load with [`LoadError::UnknownTrain`].

use std::collections::{BTreeMap, HashMap, HashSet};
use std::str::FromStr;

use rail_core::{DayTime, TrainId};
use rail_data::{TimetableStopRecord, TrainRecord};

use crate::error::{LoadError, LoadResult};
use crate::timetable::{Schedule, TimetableStop};
use crate::train::Train;

/// Build the train table from canonical train and timetable records.
///
/// Returns a `BTreeMap` so fleet iteration is ascending train id — the
/// stable processing order the simulation loop relies on.
pub fn build_fleet(
    trains: &[TrainRecord],
    timetable: &[TimetableStopRecord],
) -> LoadResult<BTreeMap<TrainId, Train>> {
    let known: HashSet<&str> = trains.iter().map(|t| t.train_id.as_str()).collect();

    // ── Group stops by train, preserving row order ────────────────────────
    let mut stops_by_train: HashMap<&str, Vec<TimetableStop>> =
        HashMap::with_capacity(trains.len());

    for row in timetable {
        if !known.contains(row.train_id.as_str()) {
            return Err(LoadError::UnknownTrain(row.train_id.clone()));
        }
        stops_by_train
            .entry(row.train_id.as_str())
            .or_default()
            .push(stop_from_record(row)?);
    }

    // ── Build one Train per record ────────────────────────────────────────
    trains
        .iter()
        .map(|record| {
            let stops = stops_by_train
                .remove(record.train_id.as_str())
                .unwrap_or_default();
            Ok((record.train_id.clone(), train_from_record(record, Schedule::new(stops))))
        })
        .collect()
}

// ── Record conversion ─────────────────────────────────────────────────────────

fn stop_from_record(record: &TimetableStopRecord) -> LoadResult<TimetableStop> {
    Ok(TimetableStop {
        station: record.station_code.clone(),
        arr: parse_day_time(record.arr_time.as_deref())?,
        dep: parse_day_time(record.dep_time.as_deref())?,
        dwell_min: record.dwell_min,
    })
}

fn parse_day_time(field: Option<&str>) -> LoadResult<Option<DayTime>> {
    field
        .map(DayTime::from_str)
        .transpose()
        .map_err(|e| LoadError::Parse(e.to_string()))
}

fn train_from_record(record: &TrainRecord, schedule: Schedule) -> Train {
    Train {
        id: record.train_id.clone(),
        name: record
            .train_name
            .clone()
            .unwrap_or_else(|| record.train_id.as_str().to_owned()),
        priority: record.priority.unwrap_or(0.0),
        speed_class_kmph: record.speed_class_kmph,
        length_m: record.length_m,
        schedule,
    }
}
