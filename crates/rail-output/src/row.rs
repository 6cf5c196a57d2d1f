//! The serialized event row written by all backends.

use serde::{Deserialize, Serialize};

use rail_core::SimClock;
use rail_sim::Event;

/// One persisted event.
///
/// `time` is "HH:MM" elapsed from run start; the optional station/section
/// fields are omitted entirely (not nulled) when absent, so station events
/// carry no `section_id` key and vice versa.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    pub time: String,
    pub train_id: String,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
}

impl EventRow {
    /// Serialize one engine event, formatting its tick against `clock`.
    pub fn from_event(event: &Event, clock: &SimClock) -> Self {
        Self {
            time: clock.hhmm(event.time),
            train_id: event.train.as_str().to_owned(),
            event: event.kind.as_str().to_owned(),
            station_code: event.station.as_ref().map(|s| s.as_str().to_owned()),
            section_id: event.section.as_ref().map(|s| s.as_str().to_owned()),
        }
    }

    /// Serialize a whole log in emission order.
    pub fn from_log(events: &[Event], clock: &SimClock) -> Vec<Self> {
        events.iter().map(|e| Self::from_event(e, clock)).collect()
    }
}
