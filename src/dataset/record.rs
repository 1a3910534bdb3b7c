use std::borrow::Cow;
use std::fmt;

pub const COMPANY: &str = "Company";
pub const INDUSTRY: &str = "Industry";
pub const REVENUE: &str = "Revenue";
pub const EMPLOYEES_COUNT: &str = "Employees Count";
pub const OWNER_NAME: &str = "Owner Name";
pub const OWNER_TITLE: &str = "Owner Title";
pub const OWNER_EMAIL: &str = "Owner Email";
pub const OWNER_LINKEDIN: &str = "Owner LinkedIn";
pub const COMPANY_LINKEDIN: &str = "Company LinkedIn";
pub const SCORE: &str = "Score";
pub const FLAGS: &str = "Flags";

/// Columns placed first in scored output, in this order, when present.
pub const PRIORITY_COLUMNS: [&str; 8] = [
    SCORE,
    FLAGS,
    COMPANY,
    INDUSTRY,
    EMPLOYEES_COUNT,
    REVENUE,
    OWNER_NAME,
    OWNER_TITLE,
];

static MISSING: RawValue = RawValue::Missing;

/// An untyped cell value as it arrives from the input table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Missing,
    Text(String),
    Number(f64),
}

impl RawValue {
    /// True for `Missing` and for NaN numbers. Empty text is present-but-empty, see `is_blank`.
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Number(n) => n.is_nan(),
            RawValue::Text(_) => false,
        }
    }

    /// True when the value is missing or its text is empty after trimming.
    pub fn is_blank(&self) -> bool {
        match self.as_text() {
            Some(text) => text.trim().is_empty(),
            None => true,
        }
    }

    /// String form of the value, or None when missing.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RawValue::Missing => None,
            RawValue::Number(n) if n.is_nan() => None,
            RawValue::Number(n) => Some(Cow::Owned(format_number(*n))),
            RawValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
        }
    }
}

/// Whole numbers render without a trailing ".0" so "250" survives a round trip.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => write!(f, "{}", text),
            None => Ok(()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// One lead as a field-name to value mapping. Field order is insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadRecord {
    fields: Vec<(String, RawValue)>,
}

impl LeadRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing records in code.
    pub fn with(mut self, name: &str, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<RawValue>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<RawValue> {
        let idx = self.fields.iter().position(|(n, _)| n == name)?;
        Some(self.fields.remove(idx).1)
    }

    /// The field's value if the record has it at all.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// The field's value, with absent fields reading as `Missing`.
    pub fn value(&self, name: &str) -> &RawValue {
        self.get(name).unwrap_or(&MISSING)
    }

    /// Absent, missing, and whitespace-only fields all count as blank.
    pub fn is_blank(&self, name: &str) -> bool {
        self.value(name).is_blank()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Short identifier for diagnostics: the company name when known.
    pub fn label(&self) -> String {
        self.value(COMPANY)
            .as_text()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "(unnamed)".to_string())
    }
}
