//! The static train description.

use rail_core::TrainId;

use crate::timetable::Schedule;

/// A train's immutable attributes plus its ordered schedule.
///
/// Runtime movement state lives with the simulation engine, not here —
/// everything on this struct is fixed once the fleet is loaded.
///
/// `priority` and `length_m` are loaded and carried but do not influence
/// movement: the current engine neither dispatches by priority nor checks
/// platform fit (the validation stage reports oversize trains instead).
#[derive(Clone, Debug, PartialEq)]
pub struct Train {
    pub id: TrainId,
    /// Display name; defaults to the train id when the record has none.
    pub name: String,
    /// Priority weight; defaults to 0.
    pub priority: f64,
    pub speed_class_kmph: f64,
    pub length_m: f64,
    pub schedule: Schedule,
}
