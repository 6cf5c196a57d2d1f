//! Canonical record structs — the schema consumed by the simulation engine.
//!
//! Field names here ARE the canonical schema; the structs serialize directly
//! to the canonical JSON artifacts.  Optional fields model columns that raw
//! exports routinely leave blank (train display names, scheduled times,
//! dwell minutes).

use serde::{Deserialize, Serialize};

use rail_core::{SectionId, StationCode, TrainId};

/// One station row: `station_code, station_name, no_of_platforms, no_of_tracks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_code: StationCode,
    pub station_name: String,
    pub no_of_platforms: u32,
    pub no_of_tracks: u32,
}

/// One section row: an undirected track segment between two stations.
///
/// `track_type` stays a free string at this layer: rows with labels outside
/// {single, double} are exported unchanged and flagged by the quality report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub section_id: SectionId,
    pub from_station: StationCode,
    pub to_station: StationCode,
    pub length_km: f64,
    pub max_speed_kmph: f64,
    pub electrified: bool,
    pub track_type: String,
}

/// One train row with its static attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub train_id: TrainId,
    pub train_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub priority: Option<f64>,
    pub length_m: f64,
    pub seats_or_tonnage: Option<f64>,
    pub accel_mps2: Option<f64>,
    pub decel_mps2: Option<f64>,
    pub speed_class_kmph: f64,
    pub dwell_std_min: Option<f64>,
}

/// One timetable row: a scheduled visit of one train to one station.
///
/// Row order within a train is the intended visiting order and must be
/// preserved end-to-end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimetableStopRecord {
    pub train_id: TrainId,
    pub station_code: StationCode,
    pub arr_time: Option<String>,
    pub dep_time: Option<String>,
    pub dwell_min: Option<i64>,
}

/// One platform row.  Consumed only by the validation stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub station_code: StationCode,
    pub platform_id: String,
    pub length_m: f64,
}

/// One loop row.  Consumed only by the validation stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopRecord {
    pub station_code: StationCode,
    pub loop_id: String,
    pub length_m: f64,
}

/// All canonical record collections for one network export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSet {
    pub stations: Vec<StationRecord>,
    pub sections: Vec<SectionRecord>,
    pub trains: Vec<TrainRecord>,
    pub timetable: Vec<TimetableStopRecord>,
    pub platforms: Vec<PlatformRecord>,
    pub loops: Vec<LoopRecord>,
}
