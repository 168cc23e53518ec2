use crate::utils::error::PassError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minimum age, in whole years, to be classified as eligible.
pub const ADULT_AGE: i32 = 18;

pub const ELIGIBLE_LABEL: &str = "Eligible";
pub const NOT_ELIGIBLE_LABEL: &str = "Not Eligible";

// 頁面元素識別碼（外部契約）
pub const VISITOR_FORM_ID: &str = "visitor-form";
pub const NAME_FIELD_ID: &str = "name";
pub const DOB_FIELD_ID: &str = "dob";
pub const PASS_INFO_ID: &str = "pass-info";

/// The raw values of one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorInput {
    pub name: String,
    // 缺欄時視為空字串
    #[serde(default)]
    pub dob: String,
}

impl VisitorInput {
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dob: dob.into(),
        }
    }
}

/// Computed age. `Invalid` stands for a date of birth that did not parse,
/// and renders as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Age {
    Years(i32),
    Invalid,
}

impl Age {
    pub fn years(&self) -> Option<i32> {
        match self {
            Age::Years(n) => Some(*n),
            Age::Invalid => None,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Years(n) => write!(f, "{}", n),
            Age::Invalid => f.write_str("NaN"),
        }
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Age::Years(n) => serializer.serialize_i32(*n),
            Age::Invalid => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    #[serde(rename = "Eligible")]
    Eligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
}

impl Eligibility {
    pub fn label(&self) -> &'static str {
        match self {
            Eligibility::Eligible => ELIGIBLE_LABEL,
            Eligibility::NotEligible => NOT_ELIGIBLE_LABEL,
        }
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassResult {
    pub age: Age,
    pub eligibility: Eligibility,
}

/// Everything a rendered pass shows. Serializes as
/// `{"name", "dob", "age", "eligibility"}` with `age: null` when invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub name: String,
    pub dob: String,
    pub age: Age,
    pub eligibility: Eligibility,
}

impl PassSummary {
    pub fn new(input: VisitorInput, result: PassResult) -> Self {
        Self {
            name: input.name,
            dob: input.dob,
            age: result.age,
            eligibility: result.eligibility,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub eligible: usize,
    pub not_eligible: usize,
    pub invalid: usize,
    pub output_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = PassError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(PassError::InvalidConfigValueError {
                field: "output_format".to_string(),
                value: other.to_string(),
                reason: "Expected one of: csv, json".to_string(),
            }),
        }
    }
}
