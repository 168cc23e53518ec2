use crate::core::eligibility::{compute_eligibility, validate_submission};
use crate::core::render::render_markup;
use crate::domain::model::{PassSummary, VisitorInput, DOB_FIELD_ID, NAME_FIELD_ID, VISITOR_FORM_ID};
use crate::domain::ports::{Clock, PassTarget};
use crate::utils::error::Result;

/// A form submission: the form's id and its `(field id, value)` pairs.
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    form_id: String,
    fields: Vec<(String, String)>,
    default_prevented: bool,
}

impl SubmitEvent {
    /// A submission of the visitor form with its `name` and `dob` fields.
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self::from_fields(
            VISITOR_FORM_ID,
            [
                (NAME_FIELD_ID.to_string(), name.into()),
                (DOB_FIELD_ID.to_string(), dob.into()),
            ],
        )
    }

    pub fn from_fields(
        form_id: impl Into<String>,
        fields: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            form_id: form_id.into(),
            fields: fields.into_iter().collect(),
            default_prevented: false,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn field(&self, id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field_id, _)| field_id == id)
            .map(|(_, value)| value.as_str())
    }

    /// Cancels the native submission (navigation/reload).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Absent fields read as empty strings.
    pub fn input(&self) -> VisitorInput {
        VisitorInput::new(
            self.field(NAME_FIELD_ID).unwrap_or_default(),
            self.field(DOB_FIELD_ID).unwrap_or_default(),
        )
    }
}

pub struct FormHandler<C: Clock, T: PassTarget> {
    clock: C,
    target: T,
    strict: bool,
}

impl<C: Clock, T: PassTarget> FormHandler<C, T> {
    pub fn new(clock: C, target: T) -> Self {
        Self {
            clock,
            target,
            strict: false,
        }
    }

    /// Reject malformed input instead of rendering `NaN`.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> Result<PassSummary> {
        event.prevent_default();

        let input = event.input();
        let today = self.clock.today();
        tracing::debug!(
            "Handling '{}' submission for '{}' (dob '{}') on {}",
            event.form_id(),
            input.name,
            input.dob,
            today
        );

        if self.strict {
            if let Err(e) = validate_submission(&input, today) {
                tracing::warn!("⚠️ Submission rejected: {}", e);
                return Err(e);
            }
        }

        let result = compute_eligibility(&input.name, &input.dob, today);
        if result.age.years().is_none() {
            tracing::warn!("⚠️ Date of birth '{}' did not parse, age is NaN", input.dob);
        }

        let summary = PassSummary::new(input, result);
        self.target.replace_contents(&render_markup(&summary))?;
        tracing::info!(
            "✅ Pass rendered into '{}': age {}, {}",
            self.target.element_id(),
            summary.age,
            summary.eligibility
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{clock::FixedClock, target::MemoryTarget};
    use crate::domain::model::{Age, Eligibility};
    use chrono::NaiveDate;

    fn handler() -> FormHandler<FixedClock, MemoryTarget> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        FormHandler::new(FixedClock::new(today), MemoryTarget::default())
    }

    #[test]
    fn test_submit_prevents_default_and_writes_target() {
        let mut handler = handler();
        let mut event = SubmitEvent::new("Alice", "2000-01-01");

        let summary = handler.handle_submit(&mut event).unwrap();

        assert!(event.default_prevented());
        assert_eq!(summary.age, Age::Years(24));
        assert_eq!(
            handler.target().contents(),
            "Name: Alice<br>Date of Birth: 2000-01-01<br>Age: 24<br>Eligibility: Eligible"
        );
    }

    #[test]
    fn test_strict_rejection_still_prevents_default() {
        let mut handler = handler().with_strict(true);
        let mut event = SubmitEvent::new("Nobody", "");

        assert!(handler.handle_submit(&mut event).is_err());
        assert!(event.default_prevented());
        assert_eq!(handler.target().contents(), "");
        assert_eq!(handler.target().writes(), 0);
    }

    #[test]
    fn test_lenient_mode_renders_nan() {
        let mut handler = handler();
        let mut event = SubmitEvent::new("Nobody", "");

        let summary = handler.handle_submit(&mut event).unwrap();

        assert_eq!(summary.eligibility, Eligibility::NotEligible);
        assert!(handler.target().contents().contains("Age: NaN"));
    }

    #[test]
    fn test_fields_are_looked_up_by_element_id() {
        let event = SubmitEvent::new("Alice", "2000-01-01");

        assert_eq!(event.form_id(), "visitor-form");
        assert_eq!(event.field("name"), Some("Alice"));
        assert_eq!(event.field("dob"), Some("2000-01-01"));
        assert_eq!(event.field("email"), None);
    }

    #[test]
    fn test_missing_dob_field_reads_as_empty() {
        let mut handler = handler();
        let mut event = SubmitEvent::from_fields(
            "visitor-form",
            [("name".to_string(), "Carol".to_string())],
        );

        let summary = handler.handle_submit(&mut event).unwrap();

        assert!(event.default_prevented());
        assert_eq!(summary.dob, "");
        assert_eq!(summary.age, Age::Invalid);
        assert_eq!(summary.eligibility, Eligibility::NotEligible);
    }
}
