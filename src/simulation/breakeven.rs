//! Break-even detection over an ordered projection

use serde::{Deserialize, Serialize};

use super::projector::{SimulationPoint, SimulationResult};

/// Horizon bracket where insurance stops being ahead of investing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    /// Midpoint of the bracket, not an interpolated root
    pub approx_year: f64,

    /// Last horizon with insurance ahead (or level)
    pub from_year: u32,

    /// First horizon with investing ahead (or level)
    pub to_year: u32,
}

impl BreakEven {
    fn between(prev: &SimulationPoint, curr: &SimulationPoint) -> Self {
        Self {
            approx_year: (prev.years as f64 + curr.years as f64) / 2.0,
            from_year: prev.years,
            to_year: curr.years,
        }
    }
}

/// First adjacent pair with `prev.delta >= 0` and `curr.delta <= 0`
///
/// Later crossings are ignored. Returns `None` for fewer than two points or
/// when delta never moves from non-negative to non-positive.
pub fn locate_break_even(result: &SimulationResult) -> Option<BreakEven> {
    result
        .points
        .windows(2)
        .find(|pair| pair[0].delta >= 0.0 && pair[1].delta <= 0.0)
        .map(|pair| BreakEven::between(&pair[0], &pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(years: u32, delta: f64) -> SimulationPoint {
        SimulationPoint {
            years,
            total_premium_paid: 0.0,
            investment_future_value: 0.0,
            insurance_net: delta,
            investment_net: 0.0,
            delta,
        }
    }

    fn result(deltas: &[(u32, f64)]) -> SimulationResult {
        SimulationResult {
            points: deltas.iter().map(|&(y, d)| point(y, d)).collect(),
        }
    }

    #[test]
    fn test_simple_crossover() {
        let be = locate_break_even(&result(&[(5, 10.0), (10, 2.0), (15, -3.0)])).unwrap();
        assert_eq!(be.from_year, 10);
        assert_eq!(be.to_year, 15);
        assert_eq!(be.approx_year, 12.5);
    }

    #[test]
    fn test_zero_delta_qualifies_on_either_side() {
        let be = locate_break_even(&result(&[(1, 0.0), (2, -1.0)])).unwrap();
        assert_eq!((be.from_year, be.to_year), (1, 2));

        let be = locate_break_even(&result(&[(1, 5.0), (2, 0.0), (3, -1.0)])).unwrap();
        assert_eq!((be.from_year, be.to_year), (1, 2));
    }

    #[test]
    fn test_first_crossing_wins() {
        let be = locate_break_even(&result(&[(1, 1.0), (2, -1.0), (3, 1.0), (4, -1.0)])).unwrap();
        assert_eq!((be.from_year, be.to_year), (1, 2));
    }

    #[test]
    fn test_upward_crossing_is_not_a_break_even() {
        assert!(locate_break_even(&result(&[(1, -5.0), (2, 5.0)])).is_none());
    }

    #[test]
    fn test_one_signed_series() {
        assert!(locate_break_even(&result(&[(1, 3.0), (2, 2.0), (3, 1.0)])).is_none());
        assert!(locate_break_even(&result(&[(1, -1.0), (2, -2.0), (3, -3.0)])).is_none());
    }

    #[test]
    fn test_fewer_than_two_points() {
        assert!(locate_break_even(&result(&[])).is_none());
        assert!(locate_break_even(&result(&[(5, -1.0)])).is_none());
        assert!(locate_break_even(&result(&[(5, 0.0)])).is_none());
    }

    #[test]
    fn test_uneven_gap_midpoint() {
        let be = locate_break_even(&result(&[(3, 1.0), (10, -1.0)])).unwrap();
        assert_eq!(be.approx_year, 6.5);
    }
}
