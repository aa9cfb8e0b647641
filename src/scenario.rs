//! Scenario runner for comparing several investment rates
//!
//! Holds one premium, benefit and horizon set, then re-runs the simulation
//! for each requested rate.

use serde::Serialize;

use crate::error::SimulationError;
use crate::simulation::{simulate, Simulation, SimulationInput};

/// Runs the same policy against different annual rates
///
/// # Example
/// ```
/// use premium_breakeven::{ScenarioRunner, SimulationInput};
///
/// let base = SimulationInput::with_default_horizons(3000.0, 1_000_000.0, 0.05).unwrap();
/// let runner = ScenarioRunner::new(base);
/// let results = runner.run_rates(&[0.01, 0.03, 0.05]).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: SimulationInput,
}

/// One rate and its simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateScenario {
    pub annual_rate: f64,
    pub simulation: Simulation,
}

impl ScenarioRunner {
    pub fn new(base: SimulationInput) -> Self {
        Self { base }
    }

    /// Input the runner varies
    pub fn base(&self) -> &SimulationInput {
        &self.base
    }

    /// Simulate at the base input's own rate
    pub fn run(&self) -> Simulation {
        simulate(&self.base)
    }

    /// Simulate at each rate, in the order given
    ///
    /// The first invalid rate fails the whole batch.
    pub fn run_rates(&self, rates: &[f64]) -> Result<Vec<RateScenario>, SimulationError> {
        rates
            .iter()
            .map(|&annual_rate| {
                let input = self.base.with_rate(annual_rate)?;
                Ok(RateScenario {
                    annual_rate,
                    simulation: simulate(&input),
                })
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    /// The reference case: 3,000 a month against a 1,000,000 benefit
    fn default() -> Self {
        Self::new(SimulationInput::reference())
    }
}
