//! Visitor details from free text, e.g. the text read off a scanned
//! registration slip.
//!
//! Each field is looked up by its label (`Name`, `Date of Visit`, `Purpose`,
//! `Date of Birth`), case-insensitively, and takes the rest of that line.

use crate::domain::model::VisitorInput;
use crate::utils::error::{PassError, Result};
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisitorDetails {
    pub name: Option<String>,
    pub date_of_visit: Option<String>,
    pub purpose: Option<String>,
    pub dob: Option<String>,
    pub errors: Vec<String>,
}

impl VisitorDetails {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Missing name or date of birth become empty strings.
    pub fn to_visitor_input(&self) -> VisitorInput {
        VisitorInput::new(
            self.name.clone().unwrap_or_default(),
            self.dob.clone().unwrap_or_default(),
        )
    }

    pub fn into_result(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(PassError::ExtractionError {
                errors: self.errors,
            })
        }
    }
}

pub struct VisitorExtractor {
    name: Regex,
    date_of_visit: Regex,
    purpose: Regex,
    dob: Regex,
    date_prefix: Regex,
}

impl VisitorExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            name: label_pattern("Name")?,
            date_of_visit: label_pattern("Date of Visit")?,
            purpose: label_pattern("Purpose")?,
            dob: label_pattern("Date of Birth")?,
            date_prefix: Regex::new(r"^\d{4}-\d{2}-\d{2}")?,
        })
    }

    /// Pulls the four fields out of `text` and records what is missing or
    /// malformed in `errors`. Never fails.
    pub fn extract(&self, text: &str) -> VisitorDetails {
        let mut details = VisitorDetails {
            name: capture(&self.name, text),
            date_of_visit: capture(&self.date_of_visit, text),
            purpose: capture(&self.purpose, text),
            dob: capture(&self.dob, text),
            errors: Vec::new(),
        };
        details.errors = self.validate(&details);

        if !details.errors.is_empty() {
            tracing::debug!("Extracted visitor details with {} problems", details.errors.len());
        }
        details
    }

    fn validate(&self, details: &VisitorDetails) -> Vec<String> {
        let mut errors = Vec::new();

        if details.name.is_none() {
            errors.push("Name is missing.".to_string());
        }
        self.check_date(&details.date_of_visit, "Date of Visit", &mut errors);
        if details.purpose.is_none() {
            errors.push("Purpose is missing.".to_string());
        }
        self.check_date(&details.dob, "Date of Birth", &mut errors);

        errors
    }

    fn check_date(&self, value: &Option<String>, label: &str, errors: &mut Vec<String>) {
        match value {
            None => errors.push(format!("{} is missing.", label)),
            Some(v) if !self.date_prefix.is_match(v) => {
                errors.push(format!("{} format should be YYYY-MM-DD.", label))
            }
            Some(_) => {}
        }
    }
}

fn label_pattern(label: &str) -> Result<Regex> {
    Ok(Regex::new(&format!(r"(?i){}[:\s]*(.*)", regex::escape(label)))?)
}

// 空白值視為缺少
fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}
