//! Age and eligibility computation.
//!
//! Everything here is pure: "today" is always a parameter, never read from
//! the system clock.

use crate::domain::model::{Age, Eligibility, PassResult, VisitorInput, ADULT_AGE};
use crate::utils::error::{PassError, Result};
use chrono::{Datelike, NaiveDate};

/// Value format of an HTML date input.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

pub fn parse_dob(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DOB_FORMAT).ok()
}

/// Calendar-year difference, minus one if the birthday has not come round yet
/// this year. A birth date after `today` yields a negative age.
pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    let month_delta = today.month() as i32 - birth.month() as i32;
    if month_delta < 0 || (month_delta == 0 && today.day() < birth.day()) {
        age -= 1;
    }
    age
}

pub fn classify(age: Age) -> Eligibility {
    match age {
        Age::Years(n) if n >= ADULT_AGE => Eligibility::Eligible,
        _ => Eligibility::NotEligible,
    }
}

/// Never fails: an unparseable `dob` becomes `Age::Invalid` and therefore
/// `NotEligible`. `name` does not influence the result.
pub fn compute_eligibility(_name: &str, dob: &str, today: NaiveDate) -> PassResult {
    let age = match parse_dob(dob) {
        Some(birth) => Age::Years(compute_age(birth, today)),
        None => Age::Invalid,
    };
    PassResult {
        age,
        eligibility: classify(age),
    }
}

/// Strict-mode check. Returns the parsed birth date when the submission is
/// acceptable.
pub fn validate_submission(input: &VisitorInput, today: NaiveDate) -> Result<NaiveDate> {
    if input.name.trim().is_empty() {
        return Err(PassError::InvalidInputError {
            field: "name".to_string(),
            value: input.name.clone(),
            reason: "name cannot be empty".to_string(),
        });
    }

    let birth = parse_dob(&input.dob).ok_or_else(|| PassError::InvalidInputError {
        field: "dob".to_string(),
        value: input.dob.clone(),
        reason: format!("expected a date in {} format", DOB_FORMAT),
    })?;

    if birth > today {
        return Err(PassError::InvalidInputError {
            field: "dob".to_string(),
            value: input.dob.clone(),
            reason: format!("date of birth is after {}", today),
        });
    }

    Ok(birth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_already_passed_this_year() {
        assert_eq!(compute_age(date(2000, 1, 1), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_birthday_not_yet_reached() {
        assert_eq!(compute_age(date(2010, 12, 31), date(2024, 6, 15)), 13);
    }

    #[test]
    fn test_same_month_earlier_day() {
        assert_eq!(compute_age(date(2000, 6, 16), date(2024, 6, 15)), 23);
        assert_eq!(compute_age(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_eighteenth_birthday_boundary() {
        let today = date(2024, 6, 15);

        let result = compute_eligibility("Eve", "2006-06-15", today);
        assert_eq!(result.age, Age::Years(18));
        assert_eq!(result.eligibility, Eligibility::Eligible);

        let result = compute_eligibility("Eve", "2006-06-16", today);
        assert_eq!(result.age, Age::Years(17));
        assert_eq!(result.eligibility, Eligibility::NotEligible);
    }

    #[test]
    fn test_leap_day_birth() {
        let birth = date(2004, 2, 29);
        assert_eq!(compute_age(birth, date(2022, 2, 28)), 17);
        assert_eq!(compute_age(birth, date(2022, 3, 1)), 18);
    }

    #[test]
    fn test_future_birth_is_negative_and_not_eligible() {
        let result = compute_eligibility("Zed", "2030-01-01", date(2024, 6, 15));
        assert_eq!(result.age, Age::Years(-6));
        assert_eq!(result.eligibility, Eligibility::NotEligible);
    }

    #[test]
    fn test_empty_dob_is_invalid_and_not_eligible() {
        let result = compute_eligibility("Nobody", "", date(2024, 6, 15));
        assert_eq!(result.age, Age::Invalid);
        assert_eq!(result.eligibility, Eligibility::NotEligible);
    }

    #[test]
    fn test_garbage_dob_is_invalid() {
        for raw in ["not-a-date", "2024-13-01", "2023-02-29", "15/06/2000"] {
            let result = compute_eligibility("X", raw, date(2024, 6, 15));
            assert_eq!(result.age, Age::Invalid, "dob {:?}", raw);
            assert_eq!(result.eligibility, Eligibility::NotEligible);
        }
    }

    #[test]
    fn test_eligibility_matches_eighteenth_birthday_for_every_day() {
        let today = date(2024, 6, 15);
        let mut birth = date(2004, 1, 1);
        let end = date(2008, 12, 31);

        while birth <= end {
            // chrono clamps Feb 29 + 18 years to Feb 28; the calendar rule does not.
            if !(birth.month() == 2 && birth.day() == 29) {
                let eighteenth = birth + Months::new(12 * 18);
                let expected = if eighteenth <= today {
                    Eligibility::Eligible
                } else {
                    Eligibility::NotEligible
                };
                let result = compute_eligibility("V", &birth.format(DOB_FORMAT).to_string(), today);
                assert_eq!(result.eligibility, expected, "dob {}", birth);
            }
            birth = birth.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_validate_submission() {
        let today = date(2024, 6, 15);

        assert_eq!(
            validate_submission(&VisitorInput::new("Alice", "2000-01-01"), today).unwrap(),
            date(2000, 1, 1)
        );
        assert!(validate_submission(&VisitorInput::new("Alice", ""), today).is_err());
        assert!(validate_submission(&VisitorInput::new("Alice", "yesterday"), today).is_err());
        assert!(validate_submission(&VisitorInput::new("Alice", "2024-06-16"), today).is_err());
        assert!(validate_submission(&VisitorInput::new("  ", "2000-01-01"), today).is_err());
    }
}
