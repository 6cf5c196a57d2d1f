//! Error types for rail-sim.

use thiserror::Error;

use rail_net::TravelError;
use rail_schedule::LoadError;

/// Errors that abort a simulation run.  There is no partial-run recovery:
/// the caller either fixes the inputs or re-runs.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("travel estimation error: {0}")]
    Travel(#[from] TravelError),
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
