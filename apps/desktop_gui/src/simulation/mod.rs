//! Demo simulation mounted by the desktop host.

pub mod ball;

use panel_core::{KeyReporter, SimulationConfig, SimulationFactory};

pub use ball::BallSimulation;

#[derive(Debug, Default)]
pub struct BallFactory;

impl SimulationFactory for BallFactory {
    type Simulation = BallSimulation;

    fn mount(&mut self, config: SimulationConfig, reporter: KeyReporter) -> Self::Simulation {
        let key = uuid::Uuid::new_v4().simple().to_string();
        tracing::info!(label = %config.label, key = %key, "mounting bounce simulation");
        reporter.report(key.clone());
        BallSimulation::new(config, key)
    }
}
