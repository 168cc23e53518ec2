use crate::core::qr::IssuedPass;
use crate::domain::model::PassSummary;
use crate::utils::error::{PassError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markup,
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PassError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "markup" | "html" => Ok(OutputFormat::Markup),
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PassError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Expected one of: markup, text, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Markup => "markup",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(s)
    }
}

fn render_lines(summary: &PassSummary, separator: &str) -> String {
    // 值原樣插入，不做跳脫
    [
        format!("Name: {}", summary.name),
        format!("Date of Birth: {}", summary.dob),
        format!("Age: {}", summary.age),
        format!("Eligibility: {}", summary.eligibility),
    ]
    .join(separator)
}

/// `Name: ..<br>Date of Birth: ..<br>Age: ..<br>Eligibility: ..`
pub fn render_markup(summary: &PassSummary) -> String {
    render_lines(summary, "<br>")
}

pub fn render_text(summary: &PassSummary) -> String {
    render_lines(summary, "\n")
}

/// name/dob/age/eligibility plus a base64 SVG `qr_code`.
pub fn render_json(summary: &PassSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&IssuedPass::new(summary)?)?)
}

pub fn render(summary: &PassSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markup => Ok(render_markup(summary)),
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Json => render_json(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Age, Eligibility};

    fn alice() -> PassSummary {
        PassSummary {
            name: "Alice".to_string(),
            dob: "2000-01-01".to_string(),
            age: Age::Years(24),
            eligibility: Eligibility::Eligible,
        }
    }

    #[test]
    fn test_markup_is_exact() {
        assert_eq!(
            render_markup(&alice()),
            "Name: Alice<br>Date of Birth: 2000-01-01<br>Age: 24<br>Eligibility: Eligible"
        );
    }

    #[test]
    fn test_text_uses_newlines() {
        assert_eq!(
            render_text(&alice()),
            "Name: Alice\nDate of Birth: 2000-01-01\nAge: 24\nEligibility: Eligible"
        );
    }

    #[test]
    fn test_json_has_null_age_when_invalid() {
        let summary = PassSummary {
            name: "Nobody".to_string(),
            dob: String::new(),
            age: Age::Invalid,
            eligibility: Eligibility::NotEligible,
        };
        let value: serde_json::Value = serde_json::from_str(&render_json(&summary).unwrap()).unwrap();
        assert_eq!(value["age"], serde_json::Value::Null);
        assert_eq!(value["eligibility"], "Not Eligible");
        assert_eq!(value["dob"], "");
        assert!(value["qr_code"].is_string());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Markup);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
