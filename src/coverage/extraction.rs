//! Structured record produced by the policy-text extraction service
//!
//! The record is best effort: every field may be missing or null. Only the
//! monthly premium and the main coverage's benefit amount feed a simulation.

use serde::{Deserialize, Serialize};
use std::error::Error;

use super::catalog::InsuranceType;
use crate::error::{DataError, SimulationError};
use crate::format::format_amount;
use crate::simulation::SimulationInput;

/// Risk a coverage pays out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskType {
    Cancer,
    Medical,
    Death,
    IncomeProtection,
    NursingCare,
    #[serde(other)]
    Other,
}

/// How a coverage pays its benefit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitType {
    LumpSum,
    Daily,
    Monthly,
    #[serde(other)]
    Other,
}

impl BenefitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitType::LumpSum => "lump sum",
            BenefitType::Daily => "daily",
            BenefitType::Monthly => "monthly",
            BenefitType::Other => "other",
        }
    }
}

/// One coverage within a policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    #[serde(default)]
    pub risk_type: Option<RiskType>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub benefit_type: Option<BenefitType>,
    #[serde(default)]
    pub benefit_amount: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Coverage {
    pub fn risk_type(&self) -> RiskType {
        self.risk_type.unwrap_or(RiskType::Other)
    }

    pub fn benefit_type(&self) -> BenefitType {
        self.benefit_type.unwrap_or(BenefitType::Other)
    }
}

/// Policy decomposition returned by the extraction service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyExtraction {
    #[serde(default)]
    pub product_name: Option<String>,

    /// Premium converted to a monthly figure by the extractor
    #[serde(default)]
    pub monthly_premium: Option<f64>,

    /// Savings or investment component detected (foreign currency, accumulation fund)
    #[serde(default)]
    pub has_investment_part: bool,

    #[serde(default)]
    pub main_coverage: Option<Coverage>,

    #[serde(default)]
    pub other_coverages: Vec<Coverage>,

    #[serde(default)]
    pub comment_for_user: Option<String>,
}

impl PolicyExtraction {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Monthly premium rounded to whole units, if usable
    pub fn candidate_premium(&self) -> Option<f64> {
        usable_amount(self.monthly_premium)
    }

    /// Main coverage benefit rounded to whole units, if usable
    pub fn candidate_benefit(&self) -> Option<f64> {
        usable_amount(self.main_coverage.as_ref().and_then(|c| c.benefit_amount))
    }

    /// Catalog category closest to the main coverage's risk
    pub fn suggested_insurance_type(&self) -> Option<InsuranceType> {
        let coverage = self.main_coverage.as_ref()?;
        coverage.risk_type.map(|risk| match risk {
            RiskType::Cancer => InsuranceType::Cancer,
            RiskType::Medical => InsuranceType::Medical,
            RiskType::Death => InsuranceType::TermLife,
            RiskType::IncomeProtection => InsuranceType::IncomeProtection,
            RiskType::NursingCare => InsuranceType::NursingCare,
            RiskType::Other => InsuranceType::Other,
        })
    }

    /// Build a simulation input from the candidate fields
    pub fn to_simulation_input(
        &self,
        annual_rate: f64,
        horizons: Vec<u32>,
    ) -> Result<SimulationInput, SimulationError> {
        let premium = self
            .candidate_premium()
            .ok_or_else(|| SimulationError::invalid("monthly_premium", "not found in extraction"))?;
        let benefit = self
            .candidate_benefit()
            .ok_or_else(|| SimulationError::invalid("benefit_amount", "not found in extraction"))?;

        SimulationInput::new(premium, benefit, annual_rate, horizons)
    }

    /// User-facing digest of what was extracted
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(name) = &self.product_name {
            lines.push(format!("Estimated product name: {}", name));
        }
        if let Some(premium) = self.candidate_premium() {
            lines.push(format!("Estimated monthly premium: about {}", format_amount(premium)));
        }
        if let Some(main) = &self.main_coverage {
            lines.push(format!(
                "Main coverage: {} ({})",
                main.label.as_deref().unwrap_or("unnamed"),
                main.benefit_type().as_str(),
            ));
            if let Some(benefit) = self.candidate_benefit() {
                lines.push(format!("Main benefit amount: about {}", format_amount(benefit)));
            }
        }
        if self.has_investment_part {
            lines.push("This policy may also include a savings or investment component.".to_string());
        }
        if let Some(comment) = &self.comment_for_user {
            lines.push(String::new());
            lines.push(comment.clone());
        }

        lines
    }
}

/// Service that turns free-form policy text into a `PolicyExtraction`
pub trait PolicyExtractor {
    fn extract(&self, policy_text: &str) -> Result<PolicyExtraction, Box<dyn Error + Send + Sync>>;
}

fn usable_amount(value: Option<f64>) -> Option<f64> {
    value
        .filter(|v| v.is_finite())
        .map(f64::round)
        .filter(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "product_name": "Cancer Plus",
        "monthly_premium": 2980.6,
        "has_investment_part": false,
        "main_coverage": {
            "risk_type": "cancer",
            "label": "Cancer diagnosis lump sum",
            "benefit_type": "lump_sum",
            "benefit_amount": 1000000,
            "note": null
        },
        "other_coverages": [
            {"risk_type": "medical", "label": "Hospital daily", "benefit_type": "daily", "benefit_amount": 10000}
        ],
        "comment_for_user": "Covers the cost shock of a cancer diagnosis."
    }"#;

    #[test]
    fn test_parse_full_record() {
        let ex = PolicyExtraction::from_json(SAMPLE).unwrap();
        assert_eq!(ex.product_name.as_deref(), Some("Cancer Plus"));
        assert_eq!(ex.other_coverages.len(), 1);
        assert_eq!(ex.other_coverages[0].benefit_type(), BenefitType::Daily);
        assert_eq!(ex.candidate_premium(), Some(2981.0));
        assert_eq!(ex.candidate_benefit(), Some(1_000_000.0));
        assert_eq!(ex.suggested_insurance_type(), Some(InsuranceType::Cancer));
    }

    #[test]
    fn test_nulls_and_unknown_values() {
        let ex = PolicyExtraction::from_json(
            r#"{"monthly_premium": null, "main_coverage": {"risk_type": "pet", "benefit_type": "weekly", "benefit_amount": null}}"#,
        )
        .unwrap();

        assert_eq!(ex.candidate_premium(), None);
        assert_eq!(ex.candidate_benefit(), None);
        let main = ex.main_coverage.as_ref().unwrap();
        assert_eq!(main.risk_type(), RiskType::Other);
        assert_eq!(main.benefit_type(), BenefitType::Other);
        assert!(!ex.has_investment_part);
    }

    #[test]
    fn test_death_maps_to_term_life() {
        let ex = PolicyExtraction::from_json(r#"{"main_coverage": {"risk_type": "death"}}"#).unwrap();
        assert_eq!(ex.suggested_insurance_type(), Some(InsuranceType::TermLife));
    }

    #[test]
    fn test_empty_object_is_valid() {
        let ex = PolicyExtraction::from_json("{}").unwrap();
        assert_eq!(ex, PolicyExtraction::default());
        assert!(ex.summary_lines().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(PolicyExtraction::from_json("not json"), Err(DataError::Json(_))));
    }

    #[test]
    fn test_to_simulation_input() {
        let ex = PolicyExtraction::from_json(SAMPLE).unwrap();
        let input = ex.to_simulation_input(0.05, vec![5, 10]).unwrap();
        assert_eq!(input.monthly_premium(), 2981.0);
        assert_eq!(input.benefit_amount(), 1_000_000.0);
    }

    #[test]
    fn test_missing_candidate_names_field() {
        let ex = PolicyExtraction::from_json(r#"{"monthly_premium": 3000}"#).unwrap();
        let err = ex.to_simulation_input(0.05, vec![5]).unwrap_err();
        assert_eq!(err.field(), "benefit_amount");

        let ex = PolicyExtraction::from_json(r#"{"monthly_premium": -3000}"#).unwrap();
        let err = ex.to_simulation_input(0.05, vec![5]).unwrap_err();
        assert_eq!(err.field(), "monthly_premium");
    }

    #[test]
    fn test_summary_lines() {
        let mut ex = PolicyExtraction::from_json(SAMPLE).unwrap();
        ex.has_investment_part = true;
        let lines = ex.summary_lines();

        assert_eq!(
            lines,
            vec![
                "Estimated product name: Cancer Plus".to_string(),
                "Estimated monthly premium: about 2,981".to_string(),
                "Main coverage: Cancer diagnosis lump sum (lump sum)".to_string(),
                "Main benefit amount: about 1,000,000".to_string(),
                "This policy may also include a savings or investment component.".to_string(),
                String::new(),
                "Covers the cost shock of a cancer diagnosis.".to_string(),
            ]
        );
    }

    struct CannedExtractor;

    impl PolicyExtractor for CannedExtractor {
        fn extract(&self, _policy_text: &str) -> Result<PolicyExtraction, Box<dyn Error + Send + Sync>> {
            Ok(PolicyExtraction::from_json(SAMPLE)?)
        }
    }

    #[test]
    fn test_extractor_feeds_simulation() {
        let ex = CannedExtractor.extract("any text").unwrap();
        let input = ex.to_simulation_input(0.05, vec![10, 15]).unwrap();
        let sim = crate::simulation::simulate(&input);
        assert_eq!(sim.result.len(), 2);
    }
}
