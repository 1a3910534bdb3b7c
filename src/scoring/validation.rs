use super::config::{ScoringConfig, Weights};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Bucket boundaries must be ordered
    let t = &config.thresholds;
    if t.revenue_mid > t.revenue_high {
        errors.push(format!(
            "scoring.thresholds.revenue_mid: {} exceeds revenue_high {}",
            t.revenue_mid, t.revenue_high
        ));
    }
    if t.employees_mid_market > t.employees_enterprise {
        errors.push(format!(
            "scoring.thresholds.employees_mid_market: {} exceeds employees_enterprise {}",
            t.employees_mid_market, t.employees_enterprise
        ));
    }

    if max_total(&config.weights).is_none() {
        errors.push("scoring.weights: maximum possible score overflows".to_string());
    }

    // Industries are compared against the normalized (lowercase, trimmed) value
    for (i, industry) in config.target_industries.iter().enumerate() {
        if industry.trim().is_empty() {
            errors.push(format!("scoring.target_industries[{}]: must not be empty", i));
        } else if *industry != industry.trim().to_lowercase() {
            errors.push(format!(
                "scoring.target_industries[{}]: '{}' must be lowercase with no surrounding spaces",
                i, industry
            ));
        }
    }

    check_keywords("decision_maker_keywords", &config.decision_maker_keywords, &mut errors);
    check_keywords("influencer_keywords", &config.influencer_keywords, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// Titles are lowercased before matching, so keywords must be lowercase too.
// An empty keyword would match every title.
fn check_keywords(field: &str, keywords: &[String], errors: &mut Vec<String>) {
    for (i, keyword) in keywords.iter().enumerate() {
        if keyword.is_empty() {
            errors.push(format!("scoring.{}[{}]: must not be empty", field, i));
        } else if *keyword != keyword.to_lowercase() {
            errors.push(format!(
                "scoring.{}[{}]: '{}' must be lowercase",
                field, i, keyword
            ));
        }
    }
}

/// Highest score any lead can reach under these weights, if it fits in a u32.
pub fn max_total(w: &Weights) -> Option<u32> {
    w.industry_match
        .max(w.industry_other)
        .checked_add(w.size_enterprise.max(w.size_mid_market).max(w.size_small))?
        .checked_add(w.revenue_high.max(w.revenue_mid))?
        .checked_add(w.decision_maker.max(w.influencer))?
        .checked_add(w.email_complete)?
        .checked_add(w.linkedin_complete)
}
