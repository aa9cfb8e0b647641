//! Premium-versus-investment simulation engine

mod input;
mod accumulation;
mod projector;
mod breakeven;

pub use input::{SimulationInput, DEFAULT_ANNUAL_RATE, DEFAULT_HORIZONS, MIN_ANNUAL_RATE};
pub use accumulation::{
    accumulate, investment_future_value, monthly_rate, total_premium_paid, Accumulation,
    MONTHS_PER_YEAR,
};
pub use projector::{project, project_parallel, SimulationPoint, SimulationResult};
pub use breakeven::{locate_break_even, BreakEven};

use log::debug;
use serde::Serialize;

/// Projection plus its break-even bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Simulation {
    pub result: SimulationResult,
    pub break_even: Option<BreakEven>,
}

/// Project all horizons and locate the break-even
pub fn simulate(input: &SimulationInput) -> Simulation {
    finish(input, project(input))
}

/// Same as `simulate`, with horizons projected on the rayon pool
pub fn simulate_parallel(input: &SimulationInput) -> Simulation {
    finish(input, project_parallel(input))
}

fn finish(input: &SimulationInput, result: SimulationResult) -> Simulation {
    let break_even = locate_break_even(&result);

    debug!(
        "simulated premium={} benefit={} rate={} horizons={} break_even={:?}",
        input.monthly_premium(),
        input.benefit_amount(),
        input.annual_rate(),
        result.len(),
        break_even,
    );

    Simulation { result, break_even }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario() -> SimulationInput {
        SimulationInput::new(3000.0, 1_000_000.0, 0.05, DEFAULT_HORIZONS.to_vec()).unwrap()
    }

    #[test]
    fn test_reference_scenario_break_even() {
        let sim = simulate(&scenario());
        let be = sim.break_even.expect("crossover expected within 40 years");

        assert_eq!(be.from_year, 10);
        assert_eq!(be.to_year, 15);
        assert_eq!(be.approx_year, (10.0 + 15.0) / 2.0);

        let year10 = sim.result.point_at(10).unwrap();
        let year15 = sim.result.point_at(15).unwrap();
        assert!(year10.delta > 0.0);
        assert!(year15.delta < 0.0);
        assert_relative_eq!(year10.delta, 174_153.161_663, max_relative = 1e-9);
        assert_relative_eq!(year15.investment_future_value, 801_866.831_356, max_relative = 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let input = scenario();
        let a = simulate(&input);
        let b = simulate(&input);

        assert_eq!(a.break_even, b.break_even);
        for (x, y) in a.result.iter().zip(b.result.iter()) {
            assert_eq!(x.delta.to_bits(), y.delta.to_bits());
            assert_eq!(x.investment_future_value.to_bits(), y.investment_future_value.to_bits());
        }
    }

    #[test]
    fn test_parallel_is_identical() {
        let input = scenario();
        assert_eq!(simulate(&input), simulate_parallel(&input));
    }

    #[test]
    fn test_huge_benefit_never_crosses() {
        let input = SimulationInput::new(0.01, 1.0e12, 0.05, vec![1, 2, 3]).unwrap();
        let sim = simulate(&input);
        assert!(sim.result.iter().all(|p| p.delta > 0.0));
        assert!(sim.break_even.is_none());
    }

    #[test]
    fn test_tiny_benefit_is_behind_from_the_start() {
        let input = SimulationInput::new(3000.0, 1.0, 0.05, vec![1, 2, 3]).unwrap();
        let sim = simulate(&input);
        assert!(sim.result.iter().all(|p| p.delta < 0.0));
        assert!(sim.break_even.is_none());
    }

    #[test]
    fn test_single_horizon_has_no_break_even() {
        let input = SimulationInput::new(3000.0, 1_000_000.0, 0.05, vec![5]).unwrap();
        assert!(simulate(&input).break_even.is_none());
    }

    #[test]
    fn test_zero_rate_scenario() {
        // With no growth, delta = benefit - 2 * premiums; 1,000,000 / 72,000 ≈ 13.9 years
        let input = SimulationInput::new(3000.0, 1_000_000.0, 0.0, DEFAULT_HORIZONS.to_vec()).unwrap();
        let sim = simulate(&input);
        let be = sim.break_even.unwrap();
        assert_eq!((be.from_year, be.to_year), (10, 15));
        for p in &sim.result {
            assert_eq!(p.investment_future_value, p.total_premium_paid);
        }
    }
}
