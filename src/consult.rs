//! Payload for the free-form consultation service
//!
//! The user asks a question about their situation; the service receives the
//! question together with the scenario the user has already filled in. The
//! service itself lives outside this crate.

use serde::Serialize;
use std::error::Error;

use crate::coverage::InsuranceType;
use crate::error::{DataError, SimulationError};
use crate::format::rate_to_percent;
use crate::risk_stats::{RiskStat, Sex};
use crate::simulation::{BreakEven, Simulation, SimulationInput, SimulationPoint};

/// What the user has entered so far, plus any simulation already run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultationScenario {
    pub age: u32,
    pub sex: Sex,
    pub risk_type: InsuranceType,

    /// Annual rate in percent
    pub annual_rate_pct: f64,

    /// Empty until a simulation has been run
    pub points: Vec<SimulationPoint>,
    pub break_even: Option<BreakEven>,
    pub risk: Option<RiskStat>,
}

impl ConsultationScenario {
    /// Scenario before any simulation
    pub fn new(age: u32, sex: Sex, risk_type: InsuranceType, annual_rate_pct: f64) -> Self {
        Self {
            age,
            sex,
            risk_type,
            annual_rate_pct,
            points: Vec::new(),
            break_even: None,
            risk: None,
        }
    }

    /// Attach a finished simulation; the rate is taken from its input
    pub fn with_simulation(mut self, input: &SimulationInput, simulation: &Simulation) -> Self {
        self.annual_rate_pct = rate_to_percent(input.annual_rate());
        self.points = simulation.result.points().to_vec();
        self.break_even = simulation.break_even;
        self
    }

    pub fn with_risk(mut self, risk: Option<RiskStat>) -> Self {
        self.risk = risk;
        self
    }

    pub fn has_simulation(&self) -> bool {
        !self.points.is_empty()
    }
}

/// One question from the user about a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultationRequest {
    user_message: String,
    scenario: ConsultationScenario,
}

impl ConsultationRequest {
    /// Blank messages are rejected
    pub fn new(user_message: &str, scenario: ConsultationScenario) -> Result<Self, SimulationError> {
        let user_message = user_message.trim();
        if user_message.is_empty() {
            return Err(SimulationError::invalid("user_message", "must not be blank"));
        }

        Ok(Self {
            user_message: user_message.to_string(),
            scenario,
        })
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn scenario(&self) -> &ConsultationScenario {
        &self.scenario
    }

    /// Message text followed by the scenario as indented JSON
    pub fn user_content(&self) -> Result<String, DataError> {
        let scenario = serde_json::to_string_pretty(&self.scenario)?;
        Ok(format!(
            "Question from the user:\n{}\n\nScenario data (coverage, simulation results):\n{}\n",
            self.user_message, scenario
        ))
    }
}

/// Service that answers a consultation question
pub trait ConsultationAdvisor {
    fn advise(&self, request: &ConsultationRequest) -> Result<String, Box<dyn Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{simulate, DEFAULT_HORIZONS};

    fn scenario() -> ConsultationScenario {
        let input = SimulationInput::from_percent_rate(3000.0, 1_000_000.0, 7.0, DEFAULT_HORIZONS.to_vec()).unwrap();
        let sim = simulate(&input);
        ConsultationScenario::new(42, Sex::Female, InsuranceType::Cancer, 5.0).with_simulation(&input, &sim)
    }

    #[test]
    fn test_scenario_without_simulation() {
        let s = ConsultationScenario::new(30, Sex::Male, InsuranceType::Medical, 3.0);
        assert!(!s.has_simulation());
        assert!(s.break_even.is_none());
        assert_eq!(s.annual_rate_pct, 3.0);
    }

    #[test]
    fn test_scenario_takes_simulation_rate() {
        let s = scenario();
        assert!(s.has_simulation());
        assert_eq!(s.annual_rate_pct, 7.0);
        assert_eq!(s.points.len(), DEFAULT_HORIZONS.len());
    }

    #[test]
    fn test_blank_message_rejected() {
        let err = ConsultationRequest::new("   \n", scenario()).unwrap_err();
        assert_eq!(err.field(), "user_message");
    }

    #[test]
    fn test_message_is_trimmed() {
        let req = ConsultationRequest::new("  Should I keep this policy?\n", scenario()).unwrap();
        assert_eq!(req.user_message(), "Should I keep this policy?");
        assert_eq!(req.scenario().age, 42);
    }

    #[test]
    fn test_user_content_embeds_scenario_json() {
        let req = ConsultationRequest::new("Is the premium too high?", scenario()).unwrap();
        let content = req.user_content().unwrap();

        assert!(content.starts_with("Question from the user:\nIs the premium too high?\n"));
        assert!(content.contains("\"risk_type\": \"cancer\""));
        assert!(content.contains("\"sex\": \"female\""));
        assert!(content.contains("\"annual_rate_pct\": 7.0"));
        assert!(content.contains("\"risk\": null"));
    }

    struct CannedAdvisor;

    impl ConsultationAdvisor for CannedAdvisor {
        fn advise(&self, request: &ConsultationRequest) -> Result<String, Box<dyn Error + Send + Sync>> {
            match request.scenario().break_even {
                Some(be) => Ok(format!("Crossover near year {:.1}", be.approx_year)),
                None => Err("no simulation to discuss".into()),
            }
        }
    }

    #[test]
    fn test_advisor_receives_request() {
        let req = ConsultationRequest::new("When does investing win?", scenario()).unwrap();
        assert!(CannedAdvisor.advise(&req).unwrap().starts_with("Crossover near year"));

        let bare = ConsultationScenario::new(30, Sex::All, InsuranceType::Other, 5.0);
        let req = ConsultationRequest::new("Anything?", bare).unwrap();
        assert!(CannedAdvisor.advise(&req).is_err());
    }
}
