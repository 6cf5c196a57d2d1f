//! Error types for rail-net.

use thiserror::Error;

use rail_core::SectionId;

/// Errors that can occur during travel-time estimation.
#[derive(Debug, Error)]
pub enum TravelError {
    /// The effective speed over a section was zero, negative, or not finite.
    /// Failing here keeps infinity/NaN out of the event timeline.
    #[error("invalid effective speed {speed_kmph} km/h on section {section}")]
    InvalidSectionSpeed {
        section: SectionId,
        speed_kmph: f64,
    },
}

/// Alias for `Result<T, TravelError>`.
pub type TravelResult<T> = Result<T, TravelError>;
