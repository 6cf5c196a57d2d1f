//! Section travel-time estimation.
//!
//! Transit duration is derived from the section length and the lower of the
//! train's speed class and the section's speed limit, rounded to whole
//! minutes with a floor of 1.
//!
//! A station pair with no connecting section is a degraded-but-non-fatal
//! path: the estimate falls back to a flat 5 minutes against the
//! unknown-section sentinel, trading log fidelity for run completion.  A
//! non-positive (or non-finite) effective speed, by contrast, is a hard
//! error — it would otherwise leak infinity or NaN into every downstream
//! timestamp.

use rail_core::{SectionId, StationCode};

use crate::error::{TravelError, TravelResult};
use crate::network::RailNetwork;

/// Flat transit minutes assumed when no section connects a station pair.
pub const FALLBACK_TRAVEL_MIN: u32 = 5;

/// The result of one travel-time estimation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TravelEstimate {
    /// Whole transit minutes, always ≥ 1.
    pub minutes: u32,
    /// The section traversed, or [`SectionId::unknown`] on the fallback path.
    pub section: SectionId,
}

/// Estimate transit minutes for a train between two adjacent scheduled stops.
///
/// `train_speed_kmph` is the train's speed class; the effective speed over
/// the section is capped by the section's own limit.
pub fn estimate_travel(
    train_speed_kmph: f64,
    network: &RailNetwork,
    from: &StationCode,
    to: &StationCode,
) -> TravelResult<TravelEstimate> {
    let Some(section) = network.section_between(from, to) else {
        return Ok(TravelEstimate {
            minutes: FALLBACK_TRAVEL_MIN,
            section: SectionId::unknown(),
        });
    };

    let effective_kmph = train_speed_kmph.min(section.max_speed_kmph);
    if !effective_kmph.is_finite() || effective_kmph <= 0.0 {
        return Err(TravelError::InvalidSectionSpeed {
            section: section.id.clone(),
            speed_kmph: effective_kmph,
        });
    }

    let minutes = (section.length_km / effective_kmph * 60.0).round() as u32;
    Ok(TravelEstimate {
        minutes: minutes.max(1),
        section: section.id.clone(),
    })
}
