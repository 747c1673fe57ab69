pub mod engine;
pub mod tables;

pub use engine::{
    calculate, calculate_with_breakdown, mortality_risk, ApacheResult, ParameterPoints,
    ScoreBreakdown, ScoredRecord,
};
