//! Premium Breakeven - insurance premiums versus investing the same cash flow
//!
//! This library provides:
//! - Premium accumulation and level-contribution future value
//! - Horizon-by-horizon projection of insurance and investment net positions
//! - Break-even detection between the two options
//! - Rate scenario batches
//! - Input records for the surrounding services (policy extraction,
//!   explanation and consultation payloads, population risk statistics)

pub mod error;
pub mod simulation;
pub mod coverage;
pub mod risk_stats;
pub mod explain;
pub mod consult;
pub mod scenario;
pub mod format;

// Re-export commonly used types
pub use error::{DataError, SimulationError};
pub use simulation::{
    simulate, simulate_parallel, BreakEven, Simulation, SimulationInput, SimulationPoint,
    SimulationResult,
};
pub use coverage::{InsuranceType, PolicyExtraction};
pub use risk_stats::{RiskStat, RiskStatsSource, RiskStatsTable, Sex};
pub use explain::{ExplanationContext, NarrativeExplainer};
pub use consult::{ConsultationAdvisor, ConsultationRequest, ConsultationScenario};
pub use scenario::ScenarioRunner;
