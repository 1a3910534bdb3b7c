use serde::{Deserialize, Serialize};

/// Main scoring configuration.
///
/// Every section is optional in YAML; missing sections and fields fall back to the
/// built-in defaults, so a config file only needs to name what it changes.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights:
///     industry_match: 40
///   thresholds:
///     revenue_high: 50000000
///   target_industries: ["saas", "fintech"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub thresholds: Thresholds,

    /// Normalized (lowercase, trimmed) industry names that earn `industry_match`
    pub target_industries: Vec<String>,

    /// Lowercase substrings of a job title that mark a decision maker
    pub decision_maker_keywords: Vec<String>,

    /// Lowercase substrings of a job title that mark an influencer
    pub influencer_keywords: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            thresholds: Thresholds::default(),
            target_industries: to_strings(&[
                "saas",
                "fintech",
                "healthtech",
                "cloud computing",
                "cybersecurity",
                "artificial intelligence",
                "data analytics",
            ]),
            decision_maker_keywords: to_strings(&[
                "ceo", "founder", "cto", "ciso", "chief", "president",
            ]),
            influencer_keywords: to_strings(&["owner", "head", "director", "vp", "vice president"]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Points awarded per scoring dimension.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub industry_match: u32,
    pub industry_other: u32,
    pub size_enterprise: u32,
    pub size_mid_market: u32,
    pub size_small: u32,
    pub revenue_high: u32,
    pub revenue_mid: u32,
    pub decision_maker: u32,
    pub influencer: u32,
    pub email_complete: u32,
    pub linkedin_complete: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            industry_match: 30,
            industry_other: 5,
            size_enterprise: 25,
            size_mid_market: 15,
            size_small: 5,
            revenue_high: 25,
            revenue_mid: 15,
            decision_maker: 20,
            influencer: 10,
            email_complete: 10,
            linkedin_complete: 10,
        }
    }
}

/// Bucket boundaries for the revenue and size dimensions.
///
/// Revenue is in dollars. `revenue_high` and `employees_enterprise` are strict
/// lower bounds; `revenue_mid` and `employees_mid_market` are inclusive.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub revenue_high: u64,
    pub revenue_mid: u64,
    pub employees_enterprise: u64,
    pub employees_mid_market: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            revenue_high: 20_000_000,
            revenue_mid: 5_000_000,
            employees_enterprise: 200,
            employees_mid_market: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.weights.industry_match, 30);
        assert_eq!(config.weights.linkedin_complete, 10);
        assert_eq!(config.thresholds.revenue_high, 20_000_000);
        assert_eq!(config.thresholds.employees_mid_market, 50);
        assert_eq!(config.target_industries.len(), 7);
        assert!(config.decision_maker_keywords.contains(&"ciso".to_string()));
        assert!(config.influencer_keywords.contains(&"vice president".to_string()));
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
weights:
  industry_match: 40
thresholds:
  revenue_high: 50000000
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.weights.industry_match, 40);
        // Untouched fields keep their defaults
        assert_eq!(config.weights.industry_other, 5);
        assert_eq!(config.thresholds.revenue_high, 50_000_000);
        assert_eq!(config.thresholds.revenue_mid, 5_000_000);
        assert_eq!(config.target_industries, ScoringConfig::default().target_industries);
    }

    #[test]
    fn test_keyword_lists_replace_defaults() {
        let yaml = r#"
decision_maker_keywords: ["owner"]
influencer_keywords: []
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.decision_maker_keywords, vec!["owner".to_string()]);
        assert!(config.influencer_keywords.is_empty());
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
weights:
  bonus: 10
"#;
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
