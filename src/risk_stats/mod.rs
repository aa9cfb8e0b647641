//! Population risk statistics shown alongside a simulation
//!
//! Purely informational: nothing here feeds the simulation arithmetic.

pub mod loader;

pub use loader::{load_risk_stats, load_risk_stats_from_reader};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::DataError;

/// Sex a statistic applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    /// Whole population
    All,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::All => "all",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            "all" => Ok(Sex::All),
            other => Err(format!("Unknown sex: {}", other)),
        }
    }
}

/// Incidence of one risk for an age band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStat {
    /// Category key, e.g. "cancer"
    pub risk_type: String,
    pub sex: Sex,

    /// Inclusive age band
    pub age_from: u32,
    pub age_to: u32,

    /// Probability of the event within one year
    pub annual_prob: f64,

    /// Probability of the event over a lifetime, when published
    pub lifetime_prob: Option<f64>,

    pub note: Option<String>,
    pub source_name: Option<String>,
    pub source_url: Option<String>,
}

impl RiskStat {
    pub fn covers_age(&self, age: u32) -> bool {
        self.age_from <= age && age <= self.age_to
    }

    /// Age band in order and probabilities within [0, 1]
    pub fn check_consistency(&self) -> Result<(), String> {
        if self.age_from > self.age_to {
            return Err(format!("age_from {} > age_to {}", self.age_from, self.age_to));
        }
        if !is_probability(self.annual_prob) {
            return Err(format!("annual_prob {} outside [0, 1]", self.annual_prob));
        }
        if let Some(lifetime) = self.lifetime_prob.filter(|&p| !is_probability(p)) {
            return Err(format!("lifetime_prob {} outside [0, 1]", lifetime));
        }
        Ok(())
    }
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// Lookup of risk statistics by category, age and sex
pub trait RiskStatsSource {
    fn lookup(&self, risk_type: &str, age: u32, sex: Sex) -> Option<RiskStat>;
}

/// In-memory risk statistics
#[derive(Debug, Clone, Default)]
pub struct RiskStatsTable {
    stats: Vec<RiskStat>,
}

impl RiskStatsTable {
    pub fn new(stats: Vec<RiskStat>) -> Self {
        Self { stats }
    }

    /// Load from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, DataError> {
        Ok(Self::new(load_risk_stats(path)?))
    }

    /// Load from CSV content
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        Ok(Self::new(load_risk_stats_from_reader(reader)?))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// First row for the category whose band covers `age`
    ///
    /// A row for the exact sex wins over a whole-population row.
    pub fn find(&self, risk_type: &str, age: u32, sex: Sex) -> Option<&RiskStat> {
        let candidates = self
            .stats
            .iter()
            .filter(|s| s.risk_type == risk_type && s.covers_age(age));

        let mut fallback = None;
        for stat in candidates {
            if stat.sex == sex {
                return Some(stat);
            }
            if stat.sex == Sex::All && fallback.is_none() {
                fallback = Some(stat);
            }
        }
        fallback
    }
}

impl RiskStatsSource for RiskStatsTable {
    fn lookup(&self, risk_type: &str, age: u32, sex: Sex) -> Option<RiskStat> {
        self.find(risk_type, age, sex).cloned()
    }
}
