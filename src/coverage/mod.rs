//! Insurance categories and the structured policy extraction record

mod catalog;
mod extraction;

pub use catalog::InsuranceType;
pub use extraction::{BenefitType, Coverage, PolicyExtraction, PolicyExtractor, RiskType};
