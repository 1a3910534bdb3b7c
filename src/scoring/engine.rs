use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use super::config::ScoringConfig;
use super::factors::{
    completeness_score, industry_score, revenue_score, size_score, title_score, Seniority,
};
use super::normalize::{normalize_employee_count, normalize_industry, normalize_revenue};
use crate::dataset::record::{
    EMPLOYEES_COUNT, INDUSTRY, OWNER_EMAIL, OWNER_LINKEDIN, OWNER_TITLE, REVENUE,
};
use crate::dataset::LeadRecord;

#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Industry", "Size", "Title"
    pub description: String, // e.g. "'saas' is a target industry", "250 employees"
    pub points: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreResult {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    /// The result substituted for a lead that could not be scored.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Reasons a single lead could not be scored.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// Configured weights add up past `u32::MAX`
    Overflow(String),
    /// Scoring panicked; carries the panic message
    Panicked(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Overflow(factor) => write!(f, "Score overflow while adding {}", factor),
            ScoreError::Panicked(msg) => write!(f, "Scoring panicked: {}", msg),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Total score for one lead. Never fails: a lead that cannot be scored is
/// logged and scores 0.
pub fn calculate_lead_score(record: &LeadRecord, config: &ScoringConfig) -> u32 {
    score_or_zero(record, config, None).score
}

/// Score with breakdown, falling back to [`ScoreResult::zero`] when scoring fails.
///
/// This is the one place a per-lead failure is logged. `row` is the 1-based
/// input row, when the lead came from a table.
pub fn score_or_zero(record: &LeadRecord, config: &ScoringConfig, row: Option<usize>) -> ScoreResult {
    match calculate_score(record, config) {
        Ok(result) => result,
        Err(e) => {
            warn!(row, lead = %record.label(), error = %e, "Failed to score lead, using 0");
            ScoreResult::zero()
        }
    }
}

/// Score one lead with its per-factor breakdown.
///
/// Runs inside a panic boundary so a bug triggered by one malformed record is
/// reported as an error for that record only.
pub fn calculate_score(record: &LeadRecord, config: &ScoringConfig) -> Result<ScoreResult, ScoreError> {
    match panic::catch_unwind(AssertUnwindSafe(|| score_factors(record, config))) {
        Ok(result) => result,
        Err(payload) => {
            let msg = if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            Err(ScoreError::Panicked(msg))
        }
    }
}

fn score_factors(record: &LeadRecord, config: &ScoringConfig) -> Result<ScoreResult, ScoreError> {
    let mut factors = Vec::with_capacity(5);

    // Normalize input fields
    let industry = normalize_industry(record.value(INDUSTRY));
    let revenue = normalize_revenue(record.value(REVENUE));
    let employees = normalize_employee_count(record.value(EMPLOYEES_COUNT));
    let title = record.value(OWNER_TITLE);
    let email = record.value(OWNER_EMAIL);
    let linkedin = record.value(OWNER_LINKEDIN);

    let industry_description = if industry.is_empty() {
        "missing".to_string()
    } else if config.target_industries.iter().any(|t| *t == industry) {
        format!("'{}' is a target industry", industry)
    } else {
        format!("'{}' (other industry)", industry)
    };
    factors.push(FactorContribution {
        label: "Industry".to_string(),
        description: industry_description,
        points: industry_score(&industry, config),
    });

    factors.push(FactorContribution {
        label: "Size".to_string(),
        description: format!("{} employees", employees),
        points: size_score(employees, config),
    });

    factors.push(FactorContribution {
        label: "Revenue".to_string(),
        description: format!("${:.0}", revenue),
        points: revenue_score(revenue, config),
    });

    let title_description = match title.as_text() {
        Some(t) => match Seniority::classify(&t, config) {
            Seniority::DecisionMaker => format!("'{}' (decision maker)", t),
            Seniority::Influencer => format!("'{}' (influencer)", t),
            Seniority::Other => format!("'{}'", t),
        },
        None => "missing".to_string(),
    };
    factors.push(FactorContribution {
        label: "Title".to_string(),
        description: title_description,
        points: title_score(title, config),
    });

    let completeness = completeness_score(email, linkedin, config)
        .ok_or_else(|| ScoreError::Overflow("Completeness".to_string()))?;
    factors.push(FactorContribution {
        label: "Completeness".to_string(),
        description: format!(
            "email: {}, linkedin: {}",
            yes_no(!email.is_blank()),
            yes_no(!linkedin.is_blank())
        ),
        points: completeness,
    });

    let mut score: u32 = 0;
    for factor in &factors {
        score = score
            .checked_add(factor.points)
            .ok_or_else(|| ScoreError::Overflow(factor.label.clone()))?;
    }

    Ok(ScoreResult {
        score,
        breakdown: ScoreBreakdown { factors },
    })
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}
