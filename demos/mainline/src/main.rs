//! mainline — end-to-end railsim demo.
//!
//! Ingests a small embedded raw export (a Delhi–Kanpur–Prayagraj corridor
//! with three trains), validates it, simulates eight hours of movement, and
//! persists the event log.  The data deliberately contains two quirks so the
//! degraded paths are visible in the output: the freight train is longer
//! than every platform it visits (reported, not fatal), and it runs
//! non-stop past Ghaziabad over a station pair with no connecting section
//! (5-minute fallback transit against the UNKNOWN sentinel).

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use rail_core::{SimConfig, Tick};
use rail_data::ingest::{
    read_loops_reader, read_platforms_reader, read_sections_reader, read_stations_reader,
    read_timetable_reader, read_trains_reader,
};
use rail_data::{validate, CanonicalSet};
use rail_output::write_run;
use rail_sim::{Sim, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const TICK_SECS: u32 = 60;
const SIM_MINUTES: u64 = 480; // 8 hours
const PROGRESS_EVERY_TICKS: u64 = 120;

// ── Raw export (legacy column names, as the ingestion stage receives them) ────

const STATIONS_CSV: &str = "\
station_id,name,platform_count,track_count\n\
NDLS,New Delhi,16,18\n\
GZB,Ghaziabad,6,8\n\
CNB,Kanpur Central,10,12\n\
PRYJ,Prayagraj Jn,10,12\n\
";

const SECTIONS_CSV: &str = "\
section_id,from_station,to_station,length_km,max_speed_kmph,electrified,single_or_double\n\
SEC001,NDLS,GZB,26,100,true,double\n\
SEC002,GZB,CNB,420,130,true,double\n\
SEC003,CNB,PRYJ,194,110,true,double\n\
";

const TRAINS_CSV: &str = "\
train_id,name,type,priority_wt,length_m,seats_or_tonnage,accel_mps2,decel_mps2,speed_class_kmph,dwell_std_min\n\
12004,Lucknow Shatabdi,express,3,470,1100,0.5,0.7,130,2\n\
64401,Delhi EMU,passenger,1,300,2400,0.8,0.9,80,1\n\
90201,Container Freight,freight,0,650,4200,0.3,0.4,75,10\n\
";

const TIMETABLE_CSV: &str = "\
train_id,station_id,sched_arrival,sched_departure,dwell_min\n\
12004,NDLS,06:00,06:05,5\n\
12004,GZB,06:25,06:27,2\n\
12004,CNB,09:45,09:50,5\n\
12004,PRYJ,11:40,11:40,0\n\
64401,NDLS,06:10,06:12,2\n\
64401,GZB,06:35,06:35,0\n\
90201,NDLS,05:30,05:40,10\n\
90201,CNB,12:00,12:00,0\n\
";

const PLATFORMS_CSV: &str = "\
station_id,platform_id,length_m\n\
NDLS,P1,600\n\
GZB,P1,480\n\
CNB,P1,600\n\
PRYJ,P1,550\n\
";

const LOOPS_CSV: &str = "\
station_id,loop_id,length_m\n\
GZB,L1,700\n\
CNB,L1,750\n\
";

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    total_events: usize,
}

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, emitted: usize) {
        self.total_events += emitted;
        if tick.0 % PROGRESS_EVERY_TICKS == 0 && tick.0 > 0 {
            println!("  tick {:>4}: {:>3} events so far", tick.0, self.total_events);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== mainline — railsim demo ===");
    println!("Tick: {TICK_SECS} s  |  Horizon: {SIM_MINUTES} min");
    println!();

    // 1. Ingest the raw export into canonical records.
    let canonical = CanonicalSet {
        stations:  read_stations_reader(Cursor::new(STATIONS_CSV))?,
        sections:  read_sections_reader(Cursor::new(SECTIONS_CSV))?,
        trains:    read_trains_reader(Cursor::new(TRAINS_CSV))?,
        timetable: read_timetable_reader(Cursor::new(TIMETABLE_CSV))?,
        platforms: read_platforms_reader(Cursor::new(PLATFORMS_CSV))?,
        loops:     read_loops_reader(Cursor::new(LOOPS_CSV))?,
    };
    println!(
        "Ingested {} stations, {} sections, {} trains, {} timetable rows",
        canonical.stations.len(),
        canonical.sections.len(),
        canonical.trains.len(),
        canonical.timetable.len(),
    );

    // 2. Validate and write the quality report (findings never halt the run).
    let reports_dir = Path::new("outputs/reports");
    std::fs::create_dir_all(reports_dir)?;
    let report = validate(&canonical);
    report.write(&reports_dir.join("data_quality_report.md"))?;
    if report.is_clean() {
        println!("Data quality: all checks passed");
    } else {
        println!("Data quality: {} finding(s)", report.findings().len());
        for finding in report.findings() {
            println!("  - {finding}");
        }
    }

    // 3. Export the canonical artifacts.
    let canonical_dir = Path::new("outputs/canonical");
    std::fs::create_dir_all(canonical_dir)?;
    canonical.write_dir(canonical_dir)?;

    // 4. Build the engine and run the tick loop.
    let mut sim = Sim::from_canonical(SimConfig { tick_secs: TICK_SECS }, &canonical)?;
    println!();
    println!("Run {} — simulating…", sim.run_id());
    let mut progress = ProgressPrinter { total_events: 0 };
    sim.run_for(SIM_MINUTES, &mut progress)?;

    // 5. Persist the event log, named by the run id.
    let logs_dir = Path::new("outputs/logs");
    std::fs::create_dir_all(logs_dir)?;
    let log_path = write_run(logs_dir, &sim)?;

    println!();
    println!("Simulated {} ticks, {} events", sim.clock.current_tick.0, sim.events().len());
    for (id, run) in &sim.trains {
        println!(
            "  {id} ({}): stop {}/{}, {}",
            run.train.name,
            run.state.stop_index,
            run.train.schedule.len(),
            if run.state.is_done() { "done" } else { "still moving" },
        );
    }
    println!("Saved events log to {}", log_path.display());

    Ok(())
}
