//! Horizon-by-horizon projection of insurance and investment net positions

use rayon::prelude::*;
use serde::Serialize;

use super::accumulation::accumulate;
use super::input::SimulationInput;

/// Both options compared at one horizon
///
/// Only the projector builds points; callers read them through the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationPoint {
    /// Elapsed years
    pub(crate) years: u32,

    /// Premiums paid up to this horizon
    pub(crate) total_premium_paid: f64,

    /// Value of the same contributions invested
    pub(crate) investment_future_value: f64,

    /// Benefit minus premiums paid
    pub(crate) insurance_net: f64,

    /// Investment value (no cost is netted off)
    pub(crate) investment_net: f64,

    /// `insurance_net - investment_net`; positive means insurance is ahead
    pub(crate) delta: f64,
}

impl SimulationPoint {
    /// Compute the point for `years` from the input alone
    pub fn at(input: &SimulationInput, years: u32) -> Self {
        let acc = accumulate(input.monthly_premium(), input.annual_rate(), years);
        let insurance_net = input.benefit_amount() - acc.total_premium_paid;
        let investment_net = acc.investment_future_value;

        Self {
            years,
            total_premium_paid: acc.total_premium_paid,
            investment_future_value: acc.investment_future_value,
            insurance_net,
            investment_net,
            delta: insurance_net - investment_net,
        }
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn total_premium_paid(&self) -> f64 {
        self.total_premium_paid
    }

    pub fn investment_future_value(&self) -> f64 {
        self.investment_future_value
    }

    pub fn insurance_net(&self) -> f64 {
        self.insurance_net
    }

    pub fn investment_net(&self) -> f64 {
        self.investment_net
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// True when insurance is at least as good as investing
    pub fn insurance_ahead(&self) -> bool {
        self.delta >= 0.0
    }
}

/// Ordered projection, one point per requested horizon
///
/// Read-only outside the crate; points line up with the input horizons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub(crate) points: Vec<SimulationPoint>,
}

impl SimulationResult {
    pub fn points(&self) -> &[SimulationPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<SimulationPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for a given horizon, if it was projected
    pub fn point_at(&self, years: u32) -> Option<&SimulationPoint> {
        self.points.iter().find(|p| p.years == years)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a SimulationPoint;
    type IntoIter = std::slice::Iter<'a, SimulationPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Project every horizon in input order
pub fn project(input: &SimulationInput) -> SimulationResult {
    let points = input
        .horizons()
        .iter()
        .map(|&years| SimulationPoint::at(input, years))
        .collect();

    SimulationResult { points }
}

/// Project horizons in parallel
///
/// Points share no state, so the result is identical to `project`;
/// `collect` on an indexed parallel iterator keeps input order.
pub fn project_parallel(input: &SimulationInput) -> SimulationResult {
    let points = input
        .horizons()
        .par_iter()
        .map(|&years| SimulationPoint::at(input, years))
        .collect();

    SimulationResult { points }
}
