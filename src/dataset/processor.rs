use tracing::{debug, info};

use super::record::{LeadRecord, RawValue, FLAGS, INDUSTRY, PRIORITY_COLUMNS, SCORE};
use super::table::Dataset;
use crate::quality::{format_flags, generate_quality_flags, QualityFlag};
use crate::scoring::{score_or_zero, ScoreBreakdown, ScoringConfig};

/// A lead with its calculated score and quality flags.
#[derive(Debug, Clone)]
pub struct ScoredLead {
    pub record: LeadRecord,
    pub score: u32,
    pub flags: Vec<QualityFlag>,
    pub breakdown: ScoreBreakdown,
}

impl ScoredLead {
    /// Flags as the display string used in the `Flags` column.
    pub fn flags_text(&self) -> String {
        format_flags(&self.flags)
    }

    /// Value of any output column, including the derived `Score` and `Flags`.
    pub fn value(&self, column: &str) -> RawValue {
        match column {
            SCORE => RawValue::Number(self.score as f64),
            FLAGS => RawValue::Text(self.flags_text()),
            _ => self.record.value(column).clone(),
        }
    }
}

/// Leads ranked by score, highest first, with the output column order.
#[derive(Debug, Clone, Default)]
pub struct ScoredDataset {
    pub columns: Vec<String>,
    pub leads: Vec<ScoredLead>,
}

impl ScoredDataset {
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Lowest and highest score present, or None for an empty dataset.
    pub fn score_bounds(&self) -> Option<(u32, u32)> {
        let min = self.leads.iter().map(|l| l.score).min()?;
        let max = self.leads.iter().map(|l| l.score).max()?;
        Some((min, max))
    }

    /// Distinct non-blank industry values, trimmed and sorted.
    pub fn industries(&self) -> Vec<String> {
        let mut industries: Vec<String> = self
            .leads
            .iter()
            .filter_map(|l| l.record.value(INDUSTRY).as_text().map(|s| s.trim().to_string()))
            .filter(|s| !s.is_empty())
            .collect();
        industries.sort();
        industries.dedup();
        industries
    }

    /// Flatten back into a plain table with `Score` and `Flags` as ordinary columns.
    pub fn to_dataset(&self) -> Dataset {
        let records = self
            .leads
            .iter()
            .map(|lead| {
                let mut record = LeadRecord::new();
                for column in &self.columns {
                    record.insert(column, lead.value(column));
                }
                record
            })
            .collect();
        Dataset::from_parts(self.columns.clone(), records)
    }
}

/// Score and flag every lead, then rank them.
///
/// An empty dataset comes back with its columns untouched. Otherwise the output has
/// `Score` and `Flags` columns, leads sorted by score descending (ties keep input
/// order), and columns in priority order followed by the rest.
pub fn process_leads(dataset: &Dataset, config: &ScoringConfig) -> ScoredDataset {
    if dataset.is_empty() {
        return ScoredDataset {
            columns: dataset.columns().to_vec(),
            leads: Vec::new(),
        };
    }

    let mut leads: Vec<ScoredLead> = dataset
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| score_lead(i, record, config))
        .collect();

    // Stable, so equal scores keep their input order
    leads.sort_by(|a, b| b.score.cmp(&a.score));

    info!(leads = leads.len(), "Scored leads");

    ScoredDataset {
        columns: order_columns(dataset.columns()),
        leads,
    }
}

fn score_lead(index: usize, raw: &LeadRecord, config: &ScoringConfig) -> ScoredLead {
    // Derived columns from an earlier run are recomputed, not carried over
    let mut record = raw.clone();
    record.remove(SCORE);
    record.remove(FLAGS);

    let result = score_or_zero(&record, config, Some(index + 1));
    let flags = generate_quality_flags(&record);

    debug!(row = index + 1, lead = %record.label(), score = result.score, "Scored lead");

    ScoredLead {
        record,
        score: result.score,
        flags,
        breakdown: result.breakdown,
    }
}

fn order_columns(input: &[String]) -> Vec<String> {
    let is_present = |name: &str| name == SCORE || name == FLAGS || input.iter().any(|c| c == name);

    let mut columns: Vec<String> = PRIORITY_COLUMNS
        .iter()
        .filter(|name| is_present(name))
        .map(|name| name.to_string())
        .collect();

    columns.extend(
        input
            .iter()
            .filter(|c| !PRIORITY_COLUMNS.contains(&c.as_str()))
            .cloned(),
    );
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::{
        COMPANY, COMPANY_LINKEDIN, EMPLOYEES_COUNT, OWNER_EMAIL, OWNER_LINKEDIN, OWNER_NAME,
        OWNER_TITLE, REVENUE,
    };

    fn lead(company: &str, industry: &str, employees: &str) -> LeadRecord {
        LeadRecord::new()
            .with(COMPANY, company)
            .with(INDUSTRY, industry)
            .with(EMPLOYEES_COUNT, employees)
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            lead("Small", "Retail", "10"),
            LeadRecord::new()
                .with("Website", "acme.io")
                .with(COMPANY, "Acme")
                .with(INDUSTRY, "SaaS")
                .with(REVENUE, "$25M")
                .with(EMPLOYEES_COUNT, "250")
                .with(OWNER_TITLE, "CEO")
                .with(OWNER_EMAIL, "a@b.com")
                .with(OWNER_LINKEDIN, "url")
                .with(OWNER_NAME, "Ada")
                .with(COMPANY_LINKEDIN, "https://linkedin.com/company/acme"),
            lead("Mid", "Fintech", "120"),
        ])
    }

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn test_empty_dataset_returned_unchanged() {
        let dataset = Dataset::with_columns(vec![COMPANY.to_string(), INDUSTRY.to_string()]).unwrap();
        let scored = process_leads(&dataset, &config());
        assert!(scored.is_empty());
        assert_eq!(scored.columns, vec![COMPANY.to_string(), INDUSTRY.to_string()]);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let scored = process_leads(&sample_dataset(), &config());
        let companies: Vec<String> = scored.leads.iter().map(|l| l.record.label()).collect();
        assert_eq!(companies, vec!["Acme", "Mid", "Small"]);
        for pair in scored.leads.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_end_to_end_score_and_flags() {
        let scored = process_leads(&sample_dataset(), &config());
        let top = &scored.leads[0];
        assert_eq!(top.score, 120);
        assert_eq!(top.flags_text(), "");
        assert_eq!(top.value(SCORE), RawValue::Number(120.0));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let dataset = Dataset::from_records(vec![
            lead("First", "Retail", "10"),
            lead("Second", "Retail", "10"),
            lead("Third", "Retail", "10"),
        ]);
        let scored = process_leads(&dataset, &config());
        let companies: Vec<String> = scored.leads.iter().map(|l| l.record.label()).collect();
        assert_eq!(companies, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_column_order() {
        let scored = process_leads(&sample_dataset(), &config());
        let expected: Vec<String> = [
            SCORE, FLAGS, COMPANY, INDUSTRY, EMPLOYEES_COUNT, REVENUE, OWNER_NAME, OWNER_TITLE,
            "Website", OWNER_EMAIL, OWNER_LINKEDIN, COMPANY_LINKEDIN,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(scored.columns, expected);
    }

    #[test]
    fn test_absent_priority_columns_are_skipped() {
        let dataset = Dataset::from_records(vec![LeadRecord::new()
            .with("Notes", "call back")
            .with(COMPANY, "Acme")]);
        let scored = process_leads(&dataset, &config());
        assert_eq!(scored.columns, vec![SCORE, FLAGS, COMPANY, "Notes"]);
    }

    #[test]
    fn test_input_is_not_modified() {
        let dataset = sample_dataset();
        let before = dataset.clone();
        let _ = process_leads(&dataset, &config());
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_rescoring_output_is_idempotent() {
        let first = process_leads(&sample_dataset(), &config());
        let second = process_leads(&first.to_dataset(), &config());

        assert_eq!(first.columns, second.columns);
        for (a, b) in first.leads.iter().zip(&second.leads) {
            assert_eq!(a.record.label(), b.record.label());
            assert_eq!(a.score, b.score);
            assert_eq!(a.flags, b.flags);
        }
    }

    #[test]
    fn test_stale_score_column_is_replaced() {
        let dataset = Dataset::from_records(vec![lead("Acme", "SaaS", "10")
            .with(SCORE, 999i64)
            .with(FLAGS, "stale")]);
        let scored = process_leads(&dataset, &config());
        assert_eq!(scored.leads[0].score, 35);
        assert!(scored.leads[0].record.get(SCORE).is_none());
        assert_eq!(scored.columns.iter().filter(|c| *c == SCORE).count(), 1);
    }

    #[test]
    fn test_failed_lead_scores_zero_and_batch_continues() {
        let mut config = config();
        config.weights.industry_match = u32::MAX;
        config.weights.size_small = 1;
        let dataset = Dataset::from_records(vec![
            lead("Overflowing", "SaaS", "10"),
            lead("Fine", "Retail", "10"),
        ]);
        let scored = process_leads(&dataset, &config);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored.leads[0].record.label(), "Fine");
        assert_eq!(scored.leads[1].record.label(), "Overflowing");
        assert_eq!(scored.leads[1].score, 0);
    }

    #[test]
    fn test_score_bounds_and_industries() {
        let scored = process_leads(&sample_dataset(), &config());
        assert_eq!(scored.score_bounds(), Some((10, 120)));
        assert_eq!(scored.industries(), vec!["Fintech", "Retail", "SaaS"]);
        assert_eq!(ScoredDataset::default().score_bounds(), None);
    }

    #[test]
    fn test_industries_are_trimmed_and_skip_blanks() {
        let dataset = Dataset::from_records(vec![
            lead("A", " SaaS ", "10"),
            lead("B", "SaaS", "10"),
            lead("C", "   ", "10"),
        ]);
        let scored = process_leads(&dataset, &config());
        assert_eq!(scored.industries(), vec!["SaaS"]);
    }
}
