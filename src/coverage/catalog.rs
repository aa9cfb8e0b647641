//! Insurance categories offered for comparison

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of insurance product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceType {
    Cancer,
    Medical,
    TermLife,
    WholeLife,
    IncomeProtection,
    NursingCare,
    PersonalPension,
    FireEarthquake,
    Auto,
    Accident,
    Other,
}

impl InsuranceType {
    /// All categories in catalog order
    pub const ALL: [InsuranceType; 11] = [
        InsuranceType::Cancer,
        InsuranceType::Medical,
        InsuranceType::TermLife,
        InsuranceType::WholeLife,
        InsuranceType::IncomeProtection,
        InsuranceType::NursingCare,
        InsuranceType::PersonalPension,
        InsuranceType::FireEarthquake,
        InsuranceType::Auto,
        InsuranceType::Accident,
        InsuranceType::Other,
    ];

    /// Wire name, also the key used by the risk statistics table
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::Cancer => "cancer",
            InsuranceType::Medical => "medical",
            InsuranceType::TermLife => "term_life",
            InsuranceType::WholeLife => "whole_life",
            InsuranceType::IncomeProtection => "income_protection",
            InsuranceType::NursingCare => "nursing_care",
            InsuranceType::PersonalPension => "personal_pension",
            InsuranceType::FireEarthquake => "fire_earthquake",
            InsuranceType::Auto => "auto",
            InsuranceType::Accident => "accident",
            InsuranceType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::Cancer => "Cancer insurance",
            InsuranceType::Medical => "Medical insurance (hospitalisation, surgery)",
            InsuranceType::TermLife => "Term life (death cover for a fixed period)",
            InsuranceType::WholeLife => "Whole life (death cover with savings)",
            InsuranceType::IncomeProtection => "Income protection / disability",
            InsuranceType::NursingCare => "Long-term care",
            InsuranceType::PersonalPension => "Personal pension (retirement savings)",
            InsuranceType::FireEarthquake => "Fire and earthquake (home)",
            InsuranceType::Auto => "Auto insurance (voluntary)",
            InsuranceType::Accident => "Accident insurance",
            InsuranceType::Other => "Other / not sure",
        }
    }

    /// One-line description of what the category covers
    pub fn description(&self) -> &'static str {
        match self {
            InsuranceType::Cancer => {
                "Lump sums and hospital or outpatient costs after a cancer diagnosis."
            }
            InsuranceType::Medical => {
                "Out-of-pocket costs of hospital stays and surgery after illness or injury."
            }
            InsuranceType::TermLife => {
                "Large death benefit for a limited period, usually the simplest life cover."
            }
            InsuranceType::WholeLife => {
                "Lifetime death benefit combined with savings and surrender value."
            }
            InsuranceType::IncomeProtection => {
                "Monthly living costs while the insured is unable to work."
            }
            InsuranceType::NursingCare => {
                "Lump sum or annuity once the insured needs long-term care."
            }
            InsuranceType::PersonalPension => {
                "Savings accumulated now and paid back later as a pension."
            }
            InsuranceType::FireEarthquake => {
                "Rebuilding costs when the home or contents are damaged by fire or earthquake."
            }
            InsuranceType::Auto => {
                "Third-party liability and vehicle damage after an accident."
            }
            InsuranceType::Accident => {
                "Treatment, death and disability from injuries in daily life or leisure."
            }
            InsuranceType::Other => {
                "Break the pamphlet down together to see which risks it actually covers."
            }
        }
    }

    /// General guidance shown next to the numeric comparison
    pub fn guidance(&self) -> &'static str {
        match self {
            InsuranceType::Cancer => {
                "Cancer cover assumes a diagnosis creates an immediate need for a lump sum. \
                 Public health insurance caps much of the medical bill, so ask how much \
                 out-of-pocket cost the household could absorb before sizing the benefit."
            }
            InsuranceType::Medical => {
                "Medical cover smooths out-of-pocket costs of hospital stays. Short stays \
                 are often manageable from savings; the question is which large costs \
                 savings could not cover."
            }
            InsuranceType::TermLife => {
                "Term cover is typically held only while children are dependent or a \
                 mortgage is outstanding. Narrowing the period and amount keeps premiums \
                 low while still covering the large risk."
            }
            InsuranceType::WholeLife => {
                "Whole life mixes protection with savings and costs more than term cover \
                 for the same benefit. Separate the protection need from the savings goal \
                 to compare against investing directly."
            }
            InsuranceType::IncomeProtection => {
                "Income protection keeps living costs covered through a long inability to \
                 work. It matters most for single-earner households or with a mortgage; \
                 check what public sickness and disability benefits already pay."
            }
            InsuranceType::NursingCare => {
                "Care cover funds long-term care costs. The need depends on the expected \
                 length and level of care, so weigh it against the overall retirement plan."
            }
            InsuranceType::PersonalPension => {
                "Pension insurance locks savings away until retirement. Early surrender \
                 often returns less than was paid in and inflation protection is limited, \
                 so compare it against investing the same money."
            }
            InsuranceType::FireEarthquake => {
                "Home cover protects against rare events that would wipe out a large asset. \
                 Whether the household could rebuild from its own funds decides the need."
            }
            InsuranceType::Auto => {
                "Third-party liability can be ruinously large, so near-unlimited liability \
                 cover is standard. Vehicle damage cover depends on the car's value and \
                 household savings."
            }
            InsuranceType::Accident => {
                "Accident cover often overlaps with medical or group policies already held. \
                 List what is covered and up to which amount across all policies."
            }
            InsuranceType::Other => {
                "Most products decompose into familiar pieces such as medical plus cancer or \
                 savings plus death cover. Mapping each risk to its amount exposes overlaps \
                 and excess cover."
            }
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InsuranceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InsuranceType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown insurance type: {}", s))
    }
}
