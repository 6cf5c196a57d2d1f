//! Data-quality checks and the human-readable quality report.
//!
//! Four checks, mirroring what operators actually trip over:
//!
//! 1. section endpoints that are missing from the station table;
//! 2. trains longer than every platform at a station they are scheduled to
//!    visit (stations with no platform rows are skipped);
//! 3. sections whose track type is outside {single, double};
//! 4. negative dwell minutes in the timetable.
//!
//! Findings never halt ingestion — the report is written even when empty and
//! the operator decides whether to fix the data or proceed.

use std::fmt;
use std::io::Write;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};

use rail_core::{SectionId, StationCode, TrainId};

use crate::error::DataResult;
use crate::records::CanonicalSet;

// ── Finding ───────────────────────────────────────────────────────────────────

/// One data-quality problem found by [`validate`].
#[derive(Clone, Debug, PartialEq)]
pub enum Finding {
    /// A section references a station absent from the station table.
    DanglingEndpoint {
        section: SectionId,
        station: StationCode,
    },
    /// A train is longer than every platform at a scheduled station.
    OversizeTrain {
        train: TrainId,
        station: StationCode,
        train_length_m: f64,
        longest_platform_m: f64,
    },
    /// A section row carries a track-type label outside {single, double}.
    InvalidTrackType {
        section: SectionId,
        label: String,
    },
    /// A timetable row carries a negative dwell.
    NegativeDwell {
        train: TrainId,
        station: StationCode,
        dwell_min: i64,
    },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DanglingEndpoint { section, station } => {
                write!(f, "Section {section} references unknown station {station}")
            }
            Finding::OversizeTrain {
                train,
                station,
                train_length_m,
                longest_platform_m,
            } => write!(
                f,
                "Train {train} ({train_length_m} m) too long for station {station} \
                 (longest platform {longest_platform_m} m)"
            ),
            Finding::InvalidTrackType { section, label } => {
                write!(f, "Section {section} has invalid track_type {label:?}")
            }
            Finding::NegativeDwell { train, station, dwell_min } => {
                write!(f, "Train {train} has negative dwell {dwell_min} min at {station}")
            }
        }
    }
}

// ── QualityReport ─────────────────────────────────────────────────────────────

/// Accumulated findings of one validation pass.
#[derive(Clone, Debug, Default)]
pub struct QualityReport {
    findings: Vec<Finding>,
}

impl QualityReport {
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// `true` when every check passed.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Render the report as Markdown.  A clean run still produces a report
    /// stating that all checks passed.
    pub fn render(&self) -> String {
        let mut out = String::from("# Data Quality Report\n");
        if self.findings.is_empty() {
            out.push_str("All checks passed\n");
        } else {
            for finding in &self.findings {
                out.push_str(&format!("- {finding}\n"));
            }
        }
        out
    }

    /// Write the rendered report to `path`.
    pub fn write(&self, path: &Path) -> DataResult<()> {
        let mut file = std::fs::File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Run all quality checks over a canonical set.
///
/// Never fails and never mutates the data: problem rows stay in the set and
/// are only reported.
pub fn validate(set: &CanonicalSet) -> QualityReport {
    let mut findings = Vec::new();

    // ── 1. Section endpoints must exist ───────────────────────────────────
    let known_stations: FxHashSet<&str> =
        set.stations.iter().map(|s| s.station_code.as_str()).collect();
    for section in &set.sections {
        for endpoint in [&section.from_station, &section.to_station] {
            if !known_stations.contains(endpoint.as_str()) {
                findings.push(Finding::DanglingEndpoint {
                    section: section.section_id.clone(),
                    station: endpoint.clone(),
                });
            }
        }
    }

    // ── 2. Longest platform must fit each scheduled train ─────────────────
    let train_lengths: FxHashMap<&str, f64> = set
        .trains
        .iter()
        .map(|t| (t.train_id.as_str(), t.length_m))
        .collect();
    let mut longest_platform: FxHashMap<&str, f64> = FxHashMap::default();
    for platform in &set.platforms {
        let entry = longest_platform
            .entry(platform.station_code.as_str())
            .or_insert(f64::MIN);
        *entry = entry.max(platform.length_m);
    }
    for stop in &set.timetable {
        let train_length = train_lengths
            .get(stop.train_id.as_str())
            .copied()
            .unwrap_or(0.0);
        // Stations without platform rows are skipped, not flagged.
        let Some(&longest) = longest_platform.get(stop.station_code.as_str()) else {
            continue;
        };
        if train_length > longest {
            findings.push(Finding::OversizeTrain {
                train: stop.train_id.clone(),
                station: stop.station_code.clone(),
                train_length_m: train_length,
                longest_platform_m: longest,
            });
        }
    }

    // ── 3. Track-type sanity ──────────────────────────────────────────────
    for section in &set.sections {
        if !matches!(section.track_type.as_str(), "single" | "double") {
            findings.push(Finding::InvalidTrackType {
                section: section.section_id.clone(),
                label: section.track_type.clone(),
            });
        }
    }

    // ── 4. Dwell times must be >= 0 ───────────────────────────────────────
    for stop in &set.timetable {
        if let Some(dwell) = stop.dwell_min
            && dwell < 0
        {
            findings.push(Finding::NegativeDwell {
                train: stop.train_id.clone(),
                station: stop.station_code.clone(),
                dwell_min: dwell,
            });
        }
    }

    QualityReport { findings }
}
