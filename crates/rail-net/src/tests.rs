//! Unit tests for rail-net.

use rail_core::{SectionId, StationCode};
use rail_data::{SectionRecord, StationRecord};

use crate::travel::{estimate_travel, FALLBACK_TRAVEL_MIN};
use crate::{RailNetwork, TrackType, TravelError};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn station(code: &str) -> StationRecord {
    StationRecord {
        station_code:    StationCode::from(code),
        station_name:    code.to_owned(),
        no_of_platforms: 4,
        no_of_tracks:    6,
    }
}

fn section(id: &str, from: &str, to: &str, length_km: f64, max_speed: f64) -> SectionRecord {
    SectionRecord {
        section_id:     SectionId::from(id),
        from_station:   StationCode::from(from),
        to_station:     StationCode::from(to),
        length_km,
        max_speed_kmph: max_speed,
        electrified:    true,
        track_type:     "double".to_owned(),
    }
}

/// A ↔ B ↔ C line.
fn line_network() -> RailNetwork {
    RailNetwork::from_records(
        &[station("AAA"), station("BBB"), station("CCC")],
        &[
            section("S1", "AAA", "BBB", 50.0, 120.0),
            section("S2", "BBB", "CCC", 30.0, 90.0),
        ],
    )
}

// ── Tables ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod network_tests {
    use super::*;

    #[test]
    fn tables_keyed_by_natural_id() {
        let net = line_network();
        assert_eq!(net.station_count(), 3);
        assert_eq!(net.section_count(), 2);
        assert_eq!(net.station("BBB").unwrap().name, "BBB");
        assert_eq!(net.section("S2").unwrap().length_km, 30.0);
        assert!(net.station("ZZZ").is_none());
    }

    #[test]
    fn sections_iterate_in_ascending_id_order() {
        // Insert out of order; table order must still be sorted.
        let net = RailNetwork::from_records(
            &[station("AAA"), station("BBB")],
            &[
                section("S9", "AAA", "BBB", 10.0, 100.0),
                section("S1", "AAA", "BBB", 20.0, 100.0),
            ],
        );
        let ids: Vec<&str> = net.sections().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["S1", "S9"]);
    }

    #[test]
    fn section_between_matches_either_orientation() {
        let net = line_network();
        let forward = net.section_between(&"AAA".into(), &"BBB".into()).unwrap();
        let reverse = net.section_between(&"BBB".into(), &"AAA".into()).unwrap();
        assert_eq!(forward.id, reverse.id);
        assert_eq!(forward.id.as_str(), "S1");
    }

    #[test]
    fn section_between_first_match_wins() {
        // Two sections connect the same pair; the lowest id is the winner
        // even though the other is shorter.
        let net = RailNetwork::from_records(
            &[station("AAA"), station("BBB")],
            &[
                section("S5", "AAA", "BBB", 5.0, 100.0),
                section("S2", "BBB", "AAA", 80.0, 100.0),
            ],
        );
        let hit = net.section_between(&"AAA".into(), &"BBB".into()).unwrap();
        assert_eq!(hit.id.as_str(), "S2");
    }

    #[test]
    fn unconnected_pair_has_no_section() {
        let net = line_network();
        assert!(net.section_between(&"AAA".into(), &"CCC".into()).is_none());
    }

    #[test]
    fn track_type_labels_parse_leniently() {
        assert_eq!(TrackType::from_label("single"), Some(TrackType::Single));
        assert_eq!(TrackType::from_label("double"), Some(TrackType::Double));
        assert_eq!(TrackType::from_label("triple"), None);

        let mut weird = section("S1", "AAA", "BBB", 10.0, 100.0);
        weird.track_type = "weird".to_owned();
        let net = RailNetwork::from_records(&[station("AAA"), station("BBB")], &[weird]);
        assert_eq!(net.section("S1").unwrap().track_type, None);
    }
}

// ── Travel estimation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod travel_tests {
    use super::*;

    #[test]
    fn travel_time_from_effective_speed() {
        // 50 km at min(100, 120) = 100 km/h → exactly 30 minutes.
        let net = line_network();
        let est = estimate_travel(100.0, &net, &"AAA".into(), &"BBB".into()).unwrap();
        assert_eq!(est.minutes, 30);
        assert_eq!(est.section.as_str(), "S1");
    }

    #[test]
    fn section_limit_caps_fast_trains() {
        // 30 km at min(160, 90) = 90 km/h → round(20.0) = 20 minutes.
        let net = line_network();
        let est = estimate_travel(160.0, &net, &"CCC".into(), &"BBB".into()).unwrap();
        assert_eq!(est.minutes, 20);
        assert_eq!(est.section.as_str(), "S2");
    }

    #[test]
    fn travel_time_floors_at_one_minute() {
        let net = RailNetwork::from_records(
            &[station("AAA"), station("BBB")],
            &[section("S1", "AAA", "BBB", 0.2, 120.0)],
        );
        // 0.2 km at 120 km/h = 0.1 min → rounds to 0, floored to 1.
        let est = estimate_travel(120.0, &net, &"AAA".into(), &"BBB".into()).unwrap();
        assert_eq!(est.minutes, 1);
    }

    #[test]
    fn missing_section_falls_back_to_sentinel() {
        let net = line_network();
        let est = estimate_travel(100.0, &net, &"AAA".into(), &"CCC".into()).unwrap();
        assert_eq!(est.minutes, FALLBACK_TRAVEL_MIN);
        assert!(est.section.is_unknown());
    }

    #[test]
    fn zero_effective_speed_is_an_error() {
        let net = RailNetwork::from_records(
            &[station("AAA"), station("BBB")],
            &[section("S1", "AAA", "BBB", 10.0, 0.0)],
        );
        let err = estimate_travel(100.0, &net, &"AAA".into(), &"BBB".into()).unwrap_err();
        assert!(matches!(
            err,
            TravelError::InvalidSectionSpeed { ref section, .. } if section.as_str() == "S1"
        ));
    }

    #[test]
    fn negative_train_speed_is_an_error() {
        let net = line_network();
        let result = estimate_travel(-10.0, &net, &"AAA".into(), &"BBB".into());
        assert!(result.is_err());
    }

    #[test]
    fn rounding_is_to_nearest_minute() {
        // 33 km at 60 km/h = 33 min exactly; 34.4 km → 34.4 min → 34.
        let net = RailNetwork::from_records(
            &[station("AAA"), station("BBB"), station("CCC")],
            &[
                section("S1", "AAA", "BBB", 33.0, 60.0),
                section("S2", "BBB", "CCC", 34.4, 60.0),
            ],
        );
        assert_eq!(
            estimate_travel(60.0, &net, &"AAA".into(), &"BBB".into()).unwrap().minutes,
            33
        );
        assert_eq!(
            estimate_travel(60.0, &net, &"BBB".into(), &"CCC".into()).unwrap().minutes,
            34
        );
    }
}
