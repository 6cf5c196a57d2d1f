//! Unit tests for rail-core.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::{DayTime, SectionId, SimClock, SimConfig, StationCode, Tick, TrainId};

// ── Identifiers ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use super::*;

    #[test]
    fn codes_sort_lexicographically() {
        let mut trains = vec![
            TrainId::from("22222"),
            TrainId::from("12951"),
            TrainId::from("12001"),
        ];
        trains.sort();
        let codes: Vec<&str> = trains.iter().map(TrainId::as_str).collect();
        assert_eq!(codes, ["12001", "12951", "22222"]);
    }

    #[test]
    fn btree_lookup_by_str() {
        let mut table = BTreeMap::new();
        table.insert(StationCode::from("NDLS"), 16u32);
        table.insert(StationCode::from("BCT"), 18u32);
        // Borrow<str> lets callers query without allocating a code.
        assert_eq!(table.get("NDLS"), Some(&16));
        assert_eq!(table.get("XXXX"), None);
    }

    #[test]
    fn display_is_bare_code() {
        assert_eq!(SectionId::from("SEC001").to_string(), "SEC001");
    }

    #[test]
    fn unknown_sentinel() {
        let sentinel = SectionId::unknown();
        assert!(sentinel.is_unknown());
        assert_eq!(sentinel.as_str(), "UNKNOWN");
        assert!(!SectionId::from("SEC001").is_unknown());
    }
}

// ── Tick / SimClock ───────────────────────────────────────────────────────────

#[cfg(test)]
mod clock {
    use super::*;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3) + 4, Tick(7));
        assert_eq!(Tick(10) - Tick(4), 6);
        assert_eq!(Tick::ZERO.offset(5), Tick(5));
    }

    #[test]
    fn advance_is_one_tick() {
        let mut clock = SimClock::new(60);
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs(), 120);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(60);
        assert_eq!(clock.ticks_for_secs(0), 0);
        assert_eq!(clock.ticks_for_secs(1), 1);
        assert_eq!(clock.ticks_for_secs(60), 1);
        assert_eq!(clock.ticks_for_secs(61), 2);
        assert_eq!(clock.ticks_for_minutes(90), 90);

        // Coarser resolution: 90 min at 10-min ticks = 9 ticks exactly,
        // 91 min needs a 10th tick to be fully covered.
        let coarse = SimClock::new(600);
        assert_eq!(coarse.ticks_for_minutes(90), 9);
        assert_eq!(coarse.ticks_for_minutes(91), 10);
    }

    #[test]
    fn hhmm_formats_elapsed_time() {
        let clock = SimClock::new(60);
        assert_eq!(clock.hhmm(Tick(0)), "00:00");
        assert_eq!(clock.hhmm(Tick(5)), "00:05");
        assert_eq!(clock.hhmm(Tick(125)), "02:05");
    }

    #[test]
    fn hhmm_wraps_at_24_hours() {
        let clock = SimClock::new(60);
        assert_eq!(clock.hhmm(Tick(24 * 60)), "00:00");
        assert_eq!(clock.hhmm(Tick(25 * 60 + 30)), "01:30");
    }

    #[test]
    fn default_config_is_one_minute_tick() {
        let config = SimConfig::default();
        assert_eq!(config.tick_secs, 60);
        assert_eq!(config.make_clock().tick_secs, 60);
    }
}

// ── DayTime ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_time {
    use super::*;

    #[test]
    fn parse_and_format() {
        let t = DayTime::from_str("08:05").unwrap();
        assert_eq!(t.hours(), 8);
        assert_eq!(t.minutes(), 5);
        assert_eq!(t.to_string(), "08:05");
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(DayTime::from_str(" 23:59 ").unwrap(), DayTime::new(23, 59).unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "8", "8:5:0x", "24:00", "12:60", "ab:cd"] {
            assert!(DayTime::from_str(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn orders_by_time_of_day() {
        assert!(DayTime::new(6, 30).unwrap() < DayTime::new(18, 0).unwrap());
    }
}
