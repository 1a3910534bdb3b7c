use std::fmt;

use crate::dataset::record::{
    COMPANY_LINKEDIN, EMPLOYEES_COUNT, INDUSTRY, OWNER_EMAIL, OWNER_NAME, OWNER_TITLE, REVENUE,
};
use crate::dataset::LeadRecord;
use crate::scoring::normalize::{normalize_employee_count, normalize_revenue};

/// A data-quality problem that makes a lead harder to qualify or contact.
///
/// Variant order is the order flags are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityFlag {
    MissingEmail,
    MissingContactName,
    MissingIndustry,
    MissingSizeRevenue,
    MissingCompanyLinkedIn,
    MissingJobTitle,
}

impl QualityFlag {
    pub fn label(&self) -> &'static str {
        match self {
            QualityFlag::MissingEmail => "Missing Email",
            QualityFlag::MissingContactName => "Missing Contact Name",
            QualityFlag::MissingIndustry => "Missing Industry",
            QualityFlag::MissingSizeRevenue => "Missing Size/Revenue Data",
            QualityFlag::MissingCompanyLinkedIn => "Missing Company LinkedIn",
            QualityFlag::MissingJobTitle => "Missing Job Title",
        }
    }
}

impl fmt::Display for QualityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flags for one lead, in reporting order. Empty when the record is complete.
pub fn generate_quality_flags(record: &LeadRecord) -> Vec<QualityFlag> {
    let mut flags = Vec::new();

    // Contact information
    if record.is_blank(OWNER_EMAIL) {
        flags.push(QualityFlag::MissingEmail);
    }
    if record.is_blank(OWNER_NAME) {
        flags.push(QualityFlag::MissingContactName);
    }

    // Company qualification data
    if record.is_blank(INDUSTRY) {
        flags.push(QualityFlag::MissingIndustry);
    }

    // Either size or revenue is enough
    let has_employees = normalize_employee_count(record.value(EMPLOYEES_COUNT)) > 0;
    let has_revenue = normalize_revenue(record.value(REVENUE)) > 0.0;
    if !has_employees && !has_revenue {
        flags.push(QualityFlag::MissingSizeRevenue);
    }

    if record.is_blank(COMPANY_LINKEDIN) {
        flags.push(QualityFlag::MissingCompanyLinkedIn);
    }
    if record.is_blank(OWNER_TITLE) {
        flags.push(QualityFlag::MissingJobTitle);
    }

    flags
}

/// Render flags as one display string, `", "`-separated.
pub fn format_flags(flags: &[QualityFlag]) -> String {
    flags
        .iter()
        .map(QualityFlag::label)
        .collect::<Vec<_>>()
        .join(", ")
}
