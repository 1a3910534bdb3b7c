pub mod config;
pub mod engine;
pub mod factors;
pub mod normalize;
pub mod summary;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_lead_score, calculate_score, score_or_zero, FactorContribution, ScoreBreakdown,
    ScoreError, ScoreResult,
};
pub use factors::Seniority;
pub use normalize::{normalize_employee_count, normalize_industry, normalize_revenue};
pub use summary::{get_scoring_summary, ScoringSummary};
pub use validation::validate_scoring;
