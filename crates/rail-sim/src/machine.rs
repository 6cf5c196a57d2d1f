//! The per-train state machine.
//!
//! One call per train per tick.  The three transition checks are evaluated
//! top-to-bottom in a single pass, which pins down the two timing subtleties
//! of the cycle:
//!
//! - A freshly arrived train with zero dwell falls straight through to the
//!   departure check: `arrive_station` and `depart_station` land in the same
//!   tick, at the same timestamp.
//! - A train exiting a section transitions to `Waiting` below the Waiting
//!   check, so its next `arrive_station` is only emitted on a later tick.
//!
//! Timers (`depart_at`, `exit_at`) are compared with `now >=`, never `==`:
//! with a coarse tick a timer may expire between ticks and is then honored
//! at the next tick boundary.

use rail_core::{SimClock, Tick};
use rail_net::{estimate_travel, RailNetwork};
use rail_schedule::Train;

use crate::events::{Event, EventKind, EventLog};
use crate::state::{TrainState, TrainStatus};
use crate::SimResult;

/// Advance one train by one tick, appending any emitted events to `log`.
pub(crate) fn step_train(
    train: &Train,
    state: &mut TrainState,
    now: Tick,
    clock: &SimClock,
    network: &RailNetwork,
    log: &mut EventLog,
) -> SimResult<()> {
    if state.is_done() {
        return Ok(());
    }

    // Defensive: a Waiting train past the end of its schedule should have
    // been marked Done; treat it as a no-op rather than panicking.  For all
    // live states the index is valid (Enroute is only entered when a next
    // stop exists).
    let Some(stop) = train.schedule.stop(state.stop_index) else {
        return Ok(());
    };

    // ── Waiting → Dwelling ────────────────────────────────────────────────
    //
    // Arrival and the dwell-timer set happen together in this step.
    if matches!(state.status, TrainStatus::Waiting) {
        log.push(Event::at_station(
            now,
            train.id.clone(),
            EventKind::ArriveStation,
            stop.station.clone(),
        ));
        let dwell_ticks = clock.ticks_for_minutes(stop.dwell_minutes());
        state.status = TrainStatus::Dwelling { depart_at: now + dwell_ticks };
    }

    // ── Dwelling → Enroute | Done ─────────────────────────────────────────
    //
    // Departure and section entry share the step and the timestamp.
    if let TrainStatus::Dwelling { depart_at } = state.status {
        if now >= depart_at {
            log.push(Event::at_station(
                now,
                train.id.clone(),
                EventKind::DepartStation,
                stop.station.clone(),
            ));
            match train.schedule.stop(state.stop_index + 1) {
                Some(next) => {
                    let estimate = estimate_travel(
                        train.speed_class_kmph,
                        network,
                        &stop.station,
                        &next.station,
                    )?;
                    log.push(Event::at_section(
                        now,
                        train.id.clone(),
                        EventKind::EnterSection,
                        estimate.section.clone(),
                    ));
                    state.status = TrainStatus::Enroute {
                        exit_at: now + clock.ticks_for_minutes(estimate.minutes as u64),
                        section: estimate.section,
                    };
                }
                None => state.status = TrainStatus::Done,
            }
        }
    }

    // ── Enroute → Waiting ─────────────────────────────────────────────────
    //
    // Transit minutes are ≥ 1, so a section entered above cannot be exited
    // in the same pass.  The arrival at the next stop lands on a later tick.
    if let TrainStatus::Enroute { exit_at, ref section } = state.status {
        if now >= exit_at {
            let section = section.clone();
            log.push(Event::at_section(now, train.id.clone(), EventKind::ExitSection, section));
            state.stop_index += 1;
            state.status = TrainStatus::Waiting;
        }
    }

    Ok(())
}
