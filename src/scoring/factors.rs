use super::config::ScoringConfig;
use crate::dataset::RawValue;

/// Seniority class inferred from a job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    DecisionMaker,
    Influencer,
    Other,
}

impl Seniority {
    /// Classify a title by keyword. Decision-maker keywords are checked first.
    pub fn classify(title: &str, config: &ScoringConfig) -> Self {
        let title = title.to_lowercase();
        if contains_any(&title, &config.decision_maker_keywords) {
            Seniority::DecisionMaker
        } else if contains_any(&title, &config.influencer_keywords) {
            Seniority::Influencer
        } else {
            Seniority::Other
        }
    }
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}

/// Industry fit. Expects an already normalized industry string.
pub fn industry_score(industry: &str, config: &ScoringConfig) -> u32 {
    if industry.is_empty() {
        return 0;
    }

    if config.target_industries.iter().any(|t| t == industry) {
        config.weights.industry_match
    } else {
        config.weights.industry_other
    }
}

/// Company size from employee count.
pub fn size_score(employees: u64, config: &ScoringConfig) -> u32 {
    let t = &config.thresholds;
    if employees > t.employees_enterprise {
        config.weights.size_enterprise
    } else if employees >= t.employees_mid_market {
        config.weights.size_mid_market
    } else if employees > 0 {
        config.weights.size_small
    } else {
        0
    }
}

/// Annual revenue in dollars.
pub fn revenue_score(revenue: f64, config: &ScoringConfig) -> u32 {
    let t = &config.thresholds;
    if revenue > t.revenue_high as f64 {
        config.weights.revenue_high
    } else if revenue >= t.revenue_mid as f64 {
        config.weights.revenue_mid
    } else {
        0
    }
}

/// Contact seniority from the raw job title.
pub fn title_score(title: &RawValue, config: &ScoringConfig) -> u32 {
    let Some(title) = title.as_text() else {
        return 0;
    };

    match Seniority::classify(&title, config) {
        Seniority::DecisionMaker => config.weights.decision_maker,
        Seniority::Influencer => config.weights.influencer,
        Seniority::Other => 0,
    }
}

/// Data completeness: points for a usable email and a usable LinkedIn URL.
///
/// Returns None only if the configured weights overflow when added.
pub fn completeness_score(email: &RawValue, linkedin: &RawValue, config: &ScoringConfig) -> Option<u32> {
    let mut score: u32 = 0;

    if !email.is_blank() {
        score = score.checked_add(config.weights.email_complete)?;
    }

    if !linkedin.is_blank() {
        score = score.checked_add(config.weights.linkedin_complete)?;
    }

    Some(score)
}
