//! Premium accumulation and level-contribution future value
//!
//! The investment alternative compounds monthly at `annual_rate / 12`.
//! This is the nominal monthly rate, not the effective one
//! (`(1 + r)^(1/12) - 1`), and published figures depend on it.

use serde::{Deserialize, Serialize};

/// Months per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Cumulative cost and investment value after an elapsed number of years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accumulation {
    /// Sum of all premiums paid so far
    pub total_premium_paid: f64,

    /// Value of the same contributions invested at the annual rate
    pub investment_future_value: f64,
}

/// Total premiums paid after `years`
pub fn total_premium_paid(monthly_premium: f64, years: u32) -> f64 {
    monthly_premium * MONTHS_PER_YEAR as f64 * years as f64
}

/// Nominal monthly rate used for compounding
pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / MONTHS_PER_YEAR as f64
}

/// Future value of an ordinary annuity of `monthly_premium` over `years`
///
/// `premium * ((1 + m)^n - 1) / m` with `m = annual_rate / 12` and
/// `n = 12 * years`; a zero rate collapses to the plain contribution sum.
/// The growth factor goes through `ln_1p`/`exp_m1` so small rates over long
/// horizons keep their precision. Non-finite arguments propagate.
pub fn investment_future_value(monthly_premium: f64, annual_rate: f64, years: u32) -> f64 {
    let m = monthly_rate(annual_rate);
    let n = (MONTHS_PER_YEAR as u64 * years as u64) as f64;

    if m == 0.0 {
        return total_premium_paid(monthly_premium, years);
    }

    let growth = (n * m.ln_1p()).exp_m1();
    monthly_premium * growth / m
}

/// Both accumulation figures for one horizon
pub fn accumulate(monthly_premium: f64, annual_rate: f64, years: u32) -> Accumulation {
    Accumulation {
        total_premium_paid: total_premium_paid(monthly_premium, years),
        investment_future_value: investment_future_value(monthly_premium, annual_rate, years),
    }
}
