//! Unit tests for rail-schedule.

use rail_core::{DayTime, StationCode, TrainId};
use rail_data::{TimetableStopRecord, TrainRecord};

use crate::{build_fleet, LoadError, Schedule, TimetableStop};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn train_record(id: &str) -> TrainRecord {
    TrainRecord {
        train_id:         TrainId::from(id),
        train_name:       Some(format!("Express {id}")),
        kind:             Some("express".to_owned()),
        priority:         Some(2.0),
        length_m:         500.0,
        seats_or_tonnage: Some(1100.0),
        accel_mps2:       Some(0.5),
        decel_mps2:       Some(0.7),
        speed_class_kmph: 110.0,
        dwell_std_min:    Some(2.0),
    }
}

fn stop_record(train_id: &str, station: &str, arr: &str, dep: &str) -> TimetableStopRecord {
    TimetableStopRecord {
        train_id:     TrainId::from(train_id),
        station_code: StationCode::from(station),
        arr_time:     Some(arr.to_owned()),
        dep_time:     Some(dep.to_owned()),
        dwell_min:    Some(5),
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn groups_stops_by_train_in_row_order() {
        // Rows for the two trains are interleaved; each train must keep its
        // own rows in file order.
        let trains = vec![train_record("T1"), train_record("T2")];
        let timetable = vec![
            stop_record("T1", "AAA", "06:00", "06:05"),
            stop_record("T2", "CCC", "06:10", "06:15"),
            stop_record("T1", "BBB", "07:00", "07:02"),
            stop_record("T2", "AAA", "08:00", "08:01"),
        ];
        let fleet = build_fleet(&trains, &timetable).unwrap();

        let visits = |id: &str| -> Vec<&str> {
            fleet[id].schedule.stops().iter().map(|s| s.station.as_str()).collect()
        };
        assert_eq!(visits("T1"), ["AAA", "BBB"]);
        assert_eq!(visits("T2"), ["CCC", "AAA"]);
    }

    #[test]
    fn stop_order_is_row_order_not_time_order() {
        // A run that wraps midnight: later rows carry earlier clock times.
        // Visiting order must stay the row order.
        let trains = vec![train_record("T1")];
        let timetable = vec![
            stop_record("T1", "AAA", "23:30", "23:35"),
            stop_record("T1", "BBB", "00:40", "00:42"),
        ];
        let fleet = build_fleet(&trains, &timetable).unwrap();
        let visits: Vec<&str> =
            fleet["T1"].schedule.stops().iter().map(|s| s.station.as_str()).collect();
        assert_eq!(visits, ["AAA", "BBB"]);
    }

    #[test]
    fn unknown_train_in_timetable_fails_load() {
        let trains = vec![train_record("T1")];
        let timetable = vec![stop_record("GHOST", "AAA", "06:00", "06:05")];
        let err = build_fleet(&trains, &timetable).unwrap_err();
        assert!(matches!(err, LoadError::UnknownTrain(id) if id.as_str() == "GHOST"));
    }

    #[test]
    fn train_without_timetable_rows_gets_empty_schedule() {
        let trains = vec![train_record("T1")];
        let fleet = build_fleet(&trains, &[]).unwrap();
        assert!(fleet["T1"].schedule.is_empty());
    }

    #[test]
    fn name_defaults_to_train_id() {
        let mut record = train_record("T7");
        record.train_name = None;
        record.priority = None;
        let fleet = build_fleet(&[record], &[]).unwrap();
        assert_eq!(fleet["T7"].name, "T7");
        assert_eq!(fleet["T7"].priority, 0.0);
    }

    #[test]
    fn scheduled_times_parse_into_day_times() {
        let trains = vec![train_record("T1")];
        let timetable = vec![stop_record("T1", "AAA", "16:25", "16:55")];
        let fleet = build_fleet(&trains, &timetable).unwrap();
        let stop = fleet["T1"].schedule.stop(0).unwrap();
        assert_eq!(stop.arr, DayTime::new(16, 25));
        assert_eq!(stop.dep, DayTime::new(16, 55));
    }

    #[test]
    fn malformed_scheduled_time_fails_load() {
        let trains = vec![train_record("T1")];
        let timetable = vec![stop_record("T1", "AAA", "25:99", "06:05")];
        assert!(matches!(
            build_fleet(&trains, &timetable),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn fleet_iterates_in_ascending_train_id() {
        let trains = vec![train_record("T9"), train_record("T1"), train_record("T5")];
        let fleet = build_fleet(&trains, &[]).unwrap();
        let ids: Vec<&str> = fleet.keys().map(TrainId::as_str).collect();
        assert_eq!(ids, ["T1", "T5", "T9"]);
    }
}

// ── Schedule / TimetableStop ──────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tests {
    use super::*;

    fn bare_stop(station: &str, dwell_min: Option<i64>) -> TimetableStop {
        TimetableStop {
            station: StationCode::from(station),
            arr: None,
            dep: None,
            dwell_min,
        }
    }

    #[test]
    fn stop_lookup_past_end_is_none() {
        let schedule = Schedule::new(vec![bare_stop("AAA", Some(2))]);
        assert_eq!(schedule.len(), 1);
        assert!(schedule.stop(0).is_some());
        assert!(schedule.stop(1).is_none());
    }

    #[test]
    fn empty_schedule() {
        let schedule = Schedule::empty();
        assert!(schedule.is_empty());
        assert!(schedule.stop(0).is_none());
    }

    #[test]
    fn dwell_defaults_to_zero_when_absent() {
        assert_eq!(bare_stop("AAA", None).dwell_minutes(), 0);
        assert_eq!(bare_stop("AAA", Some(4)).dwell_minutes(), 4);
    }

    #[test]
    fn negative_dwell_behaves_as_zero() {
        assert_eq!(bare_stop("AAA", Some(-3)).dwell_minutes(), 0);
    }
}
