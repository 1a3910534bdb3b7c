use serde::Serialize;

use super::config::{ScoringConfig, Thresholds, Weights};

/// Read-only view of the active scoring configuration, for display and debugging.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoringSummary {
    pub scoring_weights: Weights,
    pub thresholds: Thresholds,
    pub target_industries: Vec<String>,
}

pub fn get_scoring_summary(config: &ScoringConfig) -> ScoringSummary {
    ScoringSummary {
        scoring_weights: config.weights.clone(),
        thresholds: config.thresholds.clone(),
        target_industries: config.target_industries.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_shape() {
        let summary = get_scoring_summary(&ScoringConfig::default());
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["scoring_weights"]["industry_match"], 30);
        assert_eq!(value["scoring_weights"]["size_small"], 5);
        assert_eq!(value["scoring_weights"]["linkedin_complete"], 10);
        assert_eq!(value["thresholds"]["revenue_high"], 20_000_000);
        assert_eq!(value["thresholds"]["employees_mid_market"], 50);
        assert_eq!(value["target_industries"][0], "saas");
        assert_eq!(value["scoring_weights"].as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_summary_reflects_overrides() {
        let mut config = ScoringConfig::default();
        config.thresholds.revenue_mid = 1_000_000;
        config.target_industries = vec!["edtech".to_string()];
        let summary = get_scoring_summary(&config);
        assert_eq!(summary.thresholds.revenue_mid, 1_000_000);
        assert_eq!(summary.target_industries, vec!["edtech".to_string()]);
    }
}
