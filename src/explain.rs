//! Payload for the narrative explanation service
//!
//! The service itself lives outside this crate. This module assembles what
//! it receives and renders the deterministic digest it is prompted with.

use serde::Serialize;
use std::error::Error;

use crate::format::{format_amount, rate_to_percent};
use crate::risk_stats::{RiskStat, Sex};
use crate::simulation::{BreakEven, Simulation, SimulationInput, SimulationPoint};

/// Everything the explanation service needs about one simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationContext {
    pub monthly_premium: f64,
    pub benefit_amount: f64,

    /// Annual rate in percent, as the user entered it
    pub annual_rate_pct: f64,

    pub points: Vec<SimulationPoint>,
    pub break_even: Option<BreakEven>,
    pub risk: Option<RiskStat>,
}

impl ExplanationContext {
    pub fn new(input: &SimulationInput, simulation: &Simulation, risk: Option<RiskStat>) -> Self {
        Self {
            monthly_premium: input.monthly_premium(),
            benefit_amount: input.benefit_amount(),
            annual_rate_pct: rate_to_percent(input.annual_rate()),
            points: simulation.result.points().to_vec(),
            break_even: simulation.break_even,
            risk,
        }
    }

    /// Keep the percent exactly as the user typed it
    pub fn with_annual_rate_pct(mut self, annual_rate_pct: f64) -> Self {
        self.annual_rate_pct = annual_rate_pct;
        self
    }

    /// One line per horizon, amounts rounded to whole units
    pub fn summary_lines(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| {
                format!(
                    "After {} years: premiums paid {}, invested instead {}, \
                     insurance net (benefit - premiums) {}, insurance - investment {}",
                    p.years,
                    format_amount(p.total_premium_paid),
                    format_amount(p.investment_future_value),
                    format_amount(p.insurance_net),
                    format_amount(p.delta),
                )
            })
            .collect()
    }

    pub fn break_even_text(&self) -> String {
        match &self.break_even {
            Some(be) => format!(
                "Insurance and investing trade places around year {:.1} \
                 (between year {} and year {}).",
                be.approx_year, be.from_year, be.to_year
            ),
            None => "No point where insurance and investing trade places was found \
                     within the simulated horizons."
                .to_string(),
        }
    }

    pub fn risk_text(&self) -> String {
        match &self.risk {
            Some(r) => {
                let population = match r.sex {
                    Sex::Male => "men",
                    Sex::Female => "women",
                    Sex::All => "everyone",
                };
                format!(
                    "For {} aged {} to {}, the annual probability of \"{}\" is about {:.2}% \
                     (source: {}).",
                    population,
                    r.age_from,
                    r.age_to,
                    r.risk_type,
                    r.annual_prob * 100.0,
                    r.source_name.as_deref().unwrap_or("unknown"),
                )
            }
            None => "No general risk statistic was found for these conditions.".to_string(),
        }
    }

    /// Digest handed to the explanation service as its data section
    pub fn digest(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Monthly premium: {}\nBenefit amount: {}\nAssumed annual return: {}%\n\n",
            format_amount(self.monthly_premium),
            format_amount(self.benefit_amount),
            self.annual_rate_pct,
        ));
        for line in self.summary_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.break_even_text());
        out.push('\n');
        out.push_str(&self.risk_text());
        out
    }
}

/// Service that turns a simulation into a plain-language explanation
pub trait NarrativeExplainer {
    fn explain(&self, context: &ExplanationContext) -> Result<String, Box<dyn Error + Send + Sync>>;
}
