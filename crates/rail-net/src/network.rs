//! Station and section tables.
//!
//! A `Section` is an undirected connection: a train may traverse it in either
//! direction between its two endpoints.  Track type distinguishes single
//! (one track, shared bidirectional use) from double (one track per
//! direction), but the simulator does not enforce it — mutual exclusion of
//! shared infrastructure is outside the current model, and the validation
//! stage is where out-of-range labels get reported.

use std::collections::BTreeMap;
use std::fmt;

use rail_core::{SectionId, StationCode};
use rail_data::{SectionRecord, StationRecord};

// ── Station ───────────────────────────────────────────────────────────────────

/// A station, immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub code: StationCode,
    pub name: String,
    pub platforms: u32,
    pub tracks: u32,
}

impl Station {
    fn from_record(record: &StationRecord) -> Self {
        Self {
            code: record.station_code.clone(),
            name: record.station_name.clone(),
            platforms: record.no_of_platforms,
            tracks: record.no_of_tracks,
        }
    }
}

// ── TrackType ─────────────────────────────────────────────────────────────────

/// Section track layout.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TrackType {
    /// One track, shared by both directions.
    Single,
    /// One track per direction.
    Double,
}

impl TrackType {
    /// Parse a canonical label.  Returns `None` for anything outside
    /// {single, double} — such rows are reported by the validation stage
    /// and carried through without correction.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "single" => Some(TrackType::Single),
            "double" => Some(TrackType::Double),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrackType::Single => "single",
            TrackType::Double => "double",
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Section ───────────────────────────────────────────────────────────────────

/// A track segment directly connecting two stations, immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub from: StationCode,
    pub to: StationCode,
    pub length_km: f64,
    pub max_speed_kmph: f64,
    pub electrified: bool,
    /// `None` when the canonical row carried an unrecognized label.
    pub track_type: Option<TrackType>,
}

impl Section {
    fn from_record(record: &SectionRecord) -> Self {
        Self {
            id: record.section_id.clone(),
            from: record.from_station.clone(),
            to: record.to_station.clone(),
            length_km: record.length_km,
            max_speed_kmph: record.max_speed_kmph,
            electrified: record.electrified,
            track_type: TrackType::from_label(&record.track_type),
        }
    }

    /// `true` if this section connects `a` and `b`, in either orientation.
    pub fn connects(&self, a: &StationCode, b: &StationCode) -> bool {
        (&self.from == a && &self.to == b) || (&self.from == b && &self.to == a)
    }
}

// ── RailNetwork ───────────────────────────────────────────────────────────────

/// The station and section lookup tables, read-only during a run.
///
/// No referential validation happens here — that is the ingestion stage's
/// job.  A section referencing an unknown station is simply never matched by
/// any timetable pair that exists.
#[derive(Clone, Debug, Default)]
pub struct RailNetwork {
    stations: BTreeMap<StationCode, Station>,
    sections: BTreeMap<SectionId, Section>,
}

impl RailNetwork {
    /// An empty network.  Every travel estimate against it takes the
    /// unknown-section fallback path.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the lookup tables from canonical records.
    ///
    /// Duplicate keys keep the last record, matching a keyed re-index of the
    /// input collections.
    pub fn from_records(stations: &[StationRecord], sections: &[SectionRecord]) -> Self {
        Self {
            stations: stations
                .iter()
                .map(|r| (r.station_code.clone(), Station::from_record(r)))
                .collect(),
            sections: sections
                .iter()
                .map(|r| (r.section_id.clone(), Section::from_record(r)))
                .collect(),
        }
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn station(&self, code: &str) -> Option<&Station> {
        self.stations.get(code)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// All sections in table order (ascending section id).
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// The first section in table order connecting `a` and `b`, either
    /// orientation.
    ///
    /// When several sections connect the same pair, the one with the lowest
    /// section id wins.  First-match is the established tie-break policy;
    /// pinning "table order" to sorted ids keeps the winner stable across
    /// runs and load orders.  It is NOT guaranteed to be the shortest or
    /// fastest of the candidates.
    pub fn section_between(&self, a: &StationCode, b: &StationCode) -> Option<&Section> {
        self.sections.values().find(|s| s.connects(a, b))
    }
}
