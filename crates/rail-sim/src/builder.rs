//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use rail_core::{SimConfig, TrainId};
use rail_net::RailNetwork;
use rail_schedule::Train;

use crate::sim::{Sim, TrainRun};
use crate::state::TrainState;
use crate::{EventLog, RunId, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required input
///
/// - [`SimConfig`] — tick resolution (must be > 0 seconds).
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                 |
/// |---------------|-------------------------|
/// | `.network(n)` | `RailNetwork::empty()`  |
/// | `.fleet(f)`   | No trains               |
///
/// An empty network is usable: every travel estimate takes the
/// unknown-section fallback.  `build()` seeds one runtime state per train
/// (trains with empty schedules start out done) and generates the run id.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .network(network)
///     .fleet(fleet)
///     .build()?;
/// sim.run_for(60, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    network: Option<RailNetwork>,
    fleet: Option<BTreeMap<TrainId, Train>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, network: None, fleet: None }
    }

    /// Supply the station and section tables.
    pub fn network(mut self, network: RailNetwork) -> Self {
        self.network = Some(network);
        self
    }

    /// Supply the train table (see [`rail_schedule::build_fleet`]).
    pub fn fleet(mut self, fleet: BTreeMap<TrainId, Train>) -> Self {
        self.fleet = Some(fleet);
        self
    }

    /// Validate the configuration and assemble a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.config.tick_secs == 0 {
            return Err(SimError::Config("tick_secs must be > 0".to_owned()));
        }

        let trains = self
            .fleet
            .unwrap_or_default()
            .into_iter()
            .map(|(id, train)| {
                let state = TrainState::initial(&train.schedule);
                (id, TrainRun { train, state })
            })
            .collect();

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            network: self.network.unwrap_or_else(RailNetwork::empty),
            trains,
            log: EventLog::new(),
            run_id: RunId::generate(),
        })
    }
}
