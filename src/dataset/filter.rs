use super::processor::{ScoredDataset, ScoredLead};
use super::record::INDUSTRY;

/// Operator-chosen narrowing of a scored dataset.
///
/// All criteria combine with AND. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadFilter {
    /// Inclusive lower score bound
    pub min_score: Option<u32>,
    /// Inclusive upper score bound
    pub max_score: Option<u32>,
    /// Exact industry values to keep; empty keeps all
    pub industries: Vec<String>,
    /// Case-insensitive substring searched in the rendered flags
    pub flag_query: Option<String>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &ScoredLead) -> bool {
        if self.min_score.is_some_and(|min| lead.score < min) {
            return false;
        }
        if self.max_score.is_some_and(|max| lead.score > max) {
            return false;
        }

        if !self.industries.is_empty() {
            let Some(industry) = lead.record.value(INDUSTRY).as_text() else {
                return false;
            };
            let industry = industry.trim();
            if !self.industries.iter().any(|i| i.trim() == industry) {
                return false;
            }
        }

        if let Some(query) = self.flag_query.as_deref() {
            let query = query.to_lowercase();
            if !query.is_empty() && !lead.flags_text().to_lowercase().contains(&query) {
                return false;
            }
        }

        true
    }

    /// Selected industries that no lead in the dataset has.
    pub fn unknown_industries(&self, scored: &ScoredDataset) -> Vec<String> {
        let known = scored.industries();
        self.industries
            .iter()
            .map(|i| i.trim())
            .filter(|i| !known.iter().any(|k| k == i))
            .map(|i| i.to_string())
            .collect()
    }

    /// True when the score range cannot match any lead, given the scores present.
    pub fn outside_score_bounds(&self, scored: &ScoredDataset) -> bool {
        let Some((low, high)) = scored.score_bounds() else {
            return false;
        };
        self.min_score.is_some_and(|min| min > high) || self.max_score.is_some_and(|max| max < low)
    }

    /// Matching leads, in ranking order.
    pub fn apply<'a>(&self, scored: &'a ScoredDataset) -> Vec<&'a ScoredLead> {
        scored.leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::{COMPANY, EMPLOYEES_COUNT, OWNER_EMAIL};
    use crate::dataset::{process_leads, Dataset, LeadRecord};
    use crate::scoring::ScoringConfig;

    fn scored() -> ScoredDataset {
        let dataset = Dataset::from_records(vec![
            LeadRecord::new()
                .with(COMPANY, "Acme")
                .with(INDUSTRY, "SaaS")
                .with(EMPLOYEES_COUNT, "250")
                .with(OWNER_EMAIL, "a@acme.io"),
            LeadRecord::new()
                .with(COMPANY, "Shop")
                .with(INDUSTRY, "Retail")
                .with(EMPLOYEES_COUNT, "10"),
            LeadRecord::new().with(COMPANY, "Ghost"),
        ]);
        process_leads(&dataset, &ScoringConfig::default())
    }

    fn companies(leads: &[&ScoredLead]) -> Vec<String> {
        leads.iter().map(|l| l.record.label()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let scored = scored();
        assert_eq!(LeadFilter::default().apply(&scored).len(), 3);
    }

    #[test]
    fn test_score_range_inclusive() {
        let scored = scored();
        // Acme = 30 + 25 + 10 = 65, Shop = 5 + 5 = 10, Ghost = 0
        let filter = LeadFilter {
            min_score: Some(10),
            max_score: Some(65),
            ..Default::default()
        };
        assert_eq!(companies(&filter.apply(&scored)), vec!["Acme", "Shop"]);

        let filter = LeadFilter {
            max_score: Some(9),
            ..Default::default()
        };
        assert_eq!(companies(&filter.apply(&scored)), vec!["Ghost"]);
    }

    #[test]
    fn test_industry_selection_is_exact() {
        let scored = scored();
        let filter = LeadFilter {
            industries: vec!["SaaS".to_string()],
            ..Default::default()
        };
        assert_eq!(companies(&filter.apply(&scored)), vec!["Acme"]);

        let filter = LeadFilter {
            industries: vec!["saas".to_string()],
            ..Default::default()
        };
        assert!(filter.apply(&scored).is_empty());
    }

    #[test]
    fn test_missing_industry_never_matches_selection() {
        let scored = scored();
        let filter = LeadFilter {
            industries: vec!["SaaS".to_string(), "Retail".to_string()],
            ..Default::default()
        };
        assert_eq!(companies(&filter.apply(&scored)), vec!["Acme", "Shop"]);
    }

    #[test]
    fn test_flag_query_case_insensitive() {
        let scored = scored();
        let filter = LeadFilter {
            flag_query: Some("missing email".to_string()),
            ..Default::default()
        };
        assert_eq!(companies(&filter.apply(&scored)), vec!["Shop", "Ghost"]);
    }

    #[test]
    fn test_empty_flag_query_matches_all() {
        let scored = scored();
        let filter = LeadFilter {
            flag_query: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&scored).len(), 3);
    }

    #[test]
    fn test_criteria_combine() {
        let scored = scored();
        let filter = LeadFilter {
            min_score: Some(1),
            flag_query: Some("Email".to_string()),
            ..Default::default()
        };
        assert_eq!(companies(&filter.apply(&scored)), vec!["Shop"]);
    }

    #[test]
    fn test_unknown_industries_reported() {
        let scored = scored();
        let filter = LeadFilter {
            industries: vec!["SaaS".to_string(), " Mining ".to_string(), "saas".to_string()],
            ..Default::default()
        };
        assert_eq!(filter.unknown_industries(&scored), vec!["Mining", "saas"]);
        assert!(LeadFilter::default().unknown_industries(&scored).is_empty());
    }

    #[test]
    fn test_outside_score_bounds() {
        let scored = scored();
        let above = LeadFilter {
            min_score: Some(66),
            ..Default::default()
        };
        assert!(above.outside_score_bounds(&scored));

        let within = LeadFilter {
            min_score: Some(65),
            max_score: Some(120),
            ..Default::default()
        };
        assert!(!within.outside_score_bounds(&scored));
        assert!(!above.outside_score_bounds(&ScoredDataset::default()));
    }
}
