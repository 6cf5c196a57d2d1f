//! Operational events and the append-only event log.

use std::fmt;

use rail_core::{SectionId, StationCode, Tick, TrainId};

// ── EventKind ─────────────────────────────────────────────────────────────────

/// What happened.  `*Station` kinds carry a station code, `*Section` kinds a
/// section id.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    ArriveStation,
    DepartStation,
    EnterSection,
    ExitSection,
}

impl EventKind {
    /// The wire label used in persisted logs.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::ArriveStation => "arrive_station",
            EventKind::DepartStation => "depart_station",
            EventKind::EnterSection => "enter_section",
            EventKind::ExitSection => "exit_section",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// One operational event, immutable once appended to the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// The tick at which the event was emitted.
    pub time: Tick,
    pub train: TrainId,
    pub kind: EventKind,
    /// Present for `*_station` events.
    pub station: Option<StationCode>,
    /// Present for `*_section` events.
    pub section: Option<SectionId>,
}

impl Event {
    /// A station-scoped event (`arrive_station` / `depart_station`).
    pub fn at_station(time: Tick, train: TrainId, kind: EventKind, station: StationCode) -> Self {
        Self { time, train, kind, station: Some(station), section: None }
    }

    /// A section-scoped event (`enter_section` / `exit_section`).
    pub fn at_section(time: Tick, train: TrainId, kind: EventKind, section: SectionId) -> Self {
        Self { time, train, kind, station: None, section: Some(section) }
    }
}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// Append-only ordered event sequence.
///
/// Append is the only mutation: events are never reordered, rewritten, or
/// deduplicated.  At run end the log is exposed as a slice for persistence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event.
    #[inline]
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}
