pub mod config;
pub mod dataset;
pub mod output;
pub mod quality;
pub mod scoring;

pub use dataset::{process_leads, Dataset, LeadFilter, LeadRecord, RawValue, ScoredDataset, ScoredLead};
pub use quality::{generate_quality_flags, QualityFlag};
pub use scoring::{calculate_lead_score, get_scoring_summary, ScoringConfig, ScoringSummary};
