//! Validated simulation input

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Default annual rate for the investment alternative (5%)
pub const DEFAULT_ANNUAL_RATE: f64 = 0.05;

/// Default horizon checkpoints in years
pub const DEFAULT_HORIZONS: [u32; 9] = [3, 5, 10, 15, 20, 25, 30, 35, 40];

/// Lowest accepted annual rate; -100% wipes out all growth
pub const MIN_ANNUAL_RATE: f64 = -1.0;

/// Premium, benefit, rate and horizon checkpoints for one simulation request
///
/// Fields are private so every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationInput {
    /// Level premium paid every month
    monthly_premium: f64,

    /// Benefit paid out by the insurance on a claim
    benefit_amount: f64,

    /// Annual growth rate of the investment alternative (0.05 = 5%)
    annual_rate: f64,

    /// Strictly increasing horizon checkpoints in years
    horizons: Vec<u32>,
}

impl SimulationInput {
    /// Validate and build an input
    ///
    /// Fails with `InvalidInput` naming the first offending field.
    pub fn new(
        monthly_premium: f64,
        benefit_amount: f64,
        annual_rate: f64,
        horizons: Vec<u32>,
    ) -> Result<Self, SimulationError> {
        validate_positive("monthly_premium", monthly_premium)?;
        validate_positive("benefit_amount", benefit_amount)?;
        validate_rate(annual_rate)?;
        validate_horizons(&horizons)?;

        Ok(Self {
            monthly_premium,
            benefit_amount,
            annual_rate,
            horizons,
        })
    }

    /// Build an input from a rate typed in percent (5.0 = 5%)
    pub fn from_percent_rate(
        monthly_premium: f64,
        benefit_amount: f64,
        annual_rate_pct: f64,
        horizons: Vec<u32>,
    ) -> Result<Self, SimulationError> {
        Self::new(monthly_premium, benefit_amount, annual_rate_pct / 100.0, horizons)
    }

    /// Build an input using `DEFAULT_HORIZONS`
    pub fn with_default_horizons(
        monthly_premium: f64,
        benefit_amount: f64,
        annual_rate: f64,
    ) -> Result<Self, SimulationError> {
        Self::new(monthly_premium, benefit_amount, annual_rate, DEFAULT_HORIZONS.to_vec())
    }

    /// Reference case: 3,000 a month, 1,000,000 benefit, 5%, default horizons
    pub fn reference() -> Self {
        Self {
            monthly_premium: 3000.0,
            benefit_amount: 1_000_000.0,
            annual_rate: DEFAULT_ANNUAL_RATE,
            horizons: DEFAULT_HORIZONS.to_vec(),
        }
    }

    /// Same premium and benefit at another rate
    pub fn with_rate(&self, annual_rate: f64) -> Result<Self, SimulationError> {
        validate_rate(annual_rate)?;
        Ok(Self {
            annual_rate,
            ..self.clone()
        })
    }

    pub fn monthly_premium(&self) -> f64 {
        self.monthly_premium
    }

    pub fn benefit_amount(&self) -> f64 {
        self.benefit_amount
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn horizons(&self) -> &[u32] {
        &self.horizons
    }
}

/// Deserialize through validation so JSON payloads cannot bypass it
impl<'de> Deserialize<'de> for SimulationInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            monthly_premium: f64,
            benefit_amount: f64,
            #[serde(default = "default_annual_rate")]
            annual_rate: f64,
            #[serde(default = "default_horizons")]
            horizons: Vec<u32>,
        }

        let raw = Raw::deserialize(deserializer)?;
        SimulationInput::new(raw.monthly_premium, raw.benefit_amount, raw.annual_rate, raw.horizons)
            .map_err(serde::de::Error::custom)
    }
}

fn default_annual_rate() -> f64 { DEFAULT_ANNUAL_RATE }
fn default_horizons() -> Vec<u32> { DEFAULT_HORIZONS.to_vec() }

fn validate_positive(field: &str, value: f64) -> Result<(), SimulationError> {
    if !value.is_finite() {
        return Err(SimulationError::invalid(field, format!("must be finite, got {}", value)));
    }
    if value <= 0.0 {
        return Err(SimulationError::invalid(field, format!("must be positive, got {}", value)));
    }
    Ok(())
}

fn validate_rate(annual_rate: f64) -> Result<(), SimulationError> {
    if !annual_rate.is_finite() {
        return Err(SimulationError::invalid(
            "annual_rate",
            format!("must be finite, got {}", annual_rate),
        ));
    }
    if annual_rate < MIN_ANNUAL_RATE {
        return Err(SimulationError::invalid(
            "annual_rate",
            format!("must be at least {}, got {}", MIN_ANNUAL_RATE, annual_rate),
        ));
    }
    Ok(())
}

fn validate_horizons(horizons: &[u32]) -> Result<(), SimulationError> {
    if horizons.is_empty() {
        return Err(SimulationError::invalid("horizons", "must not be empty"));
    }
    if horizons[0] == 0 {
        return Err(SimulationError::invalid("horizons", "years must be positive"));
    }
    for pair in horizons.windows(2) {
        if pair[1] <= pair[0] {
            return Err(SimulationError::invalid(
                "horizons",
                format!("must be strictly increasing, found {} after {}", pair[1], pair[0]),
            ));
        }
    }
    Ok(())
}
