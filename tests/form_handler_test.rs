use anyhow::Result;
use chrono::NaiveDate;
use visitor_pass::{Age, Eligibility, FixedClock, FormHandler, MemoryTarget, PassError, SubmitEvent};

fn handler_on(y: i32, m: u32, d: u32) -> FormHandler<FixedClock, MemoryTarget> {
    let today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    FormHandler::new(FixedClock::new(today), MemoryTarget::default())
}

#[test]
fn test_every_submission_prevents_native_submit() -> Result<()> {
    let mut handler = handler_on(2024, 6, 15);

    for (name, dob) in [("Alice", "2000-01-01"), ("Bob", "2010-12-31"), ("Nobody", "")] {
        let mut event = SubmitEvent::new(name, dob);
        assert!(!event.default_prevented());
        handler.handle_submit(&mut event)?;
        assert!(event.default_prevented());
    }
    Ok(())
}

#[test]
fn test_second_submission_replaces_prior_pass() -> Result<()> {
    let mut handler = handler_on(2024, 6, 15);

    handler.handle_submit(&mut SubmitEvent::new("Alice", "2000-01-01"))?;
    handler.handle_submit(&mut SubmitEvent::new("Bob", "2010-12-31"))?;

    let target = handler.into_target();
    assert_eq!(target.writes(), 2);
    assert_eq!(
        target.contents(),
        "Name: Bob<br>Date of Birth: 2010-12-31<br>Age: 13<br>Eligibility: Not Eligible"
    );
    Ok(())
}

#[test]
fn test_clock_drives_the_result() -> Result<()> {
    let mut before = handler_on(2022, 2, 28);
    let mut after = handler_on(2022, 3, 1);

    let summary = before.handle_submit(&mut SubmitEvent::new("Leap", "2004-02-29"))?;
    assert_eq!(summary.age, Age::Years(17));
    assert_eq!(summary.eligibility, Eligibility::NotEligible);

    let summary = after.handle_submit(&mut SubmitEvent::new("Leap", "2004-02-29"))?;
    assert_eq!(summary.age, Age::Years(18));
    assert_eq!(summary.eligibility, Eligibility::Eligible);
    Ok(())
}

#[test]
fn test_strict_mode_rejections() {
    let mut handler = handler_on(2024, 6, 15).with_strict(true);

    for (name, dob) in [
        ("Alice", ""),
        ("Alice", "01/01/2000"),
        ("Alice", "2030-01-01"),
        ("", "2000-01-01"),
    ] {
        let mut event = SubmitEvent::new(name, dob);
        let err = handler.handle_submit(&mut event).unwrap_err();
        assert!(matches!(err, PassError::InvalidInputError { .. }), "{:?}", err);
        assert!(event.default_prevented());
    }

    assert_eq!(handler.target().writes(), 0);
}

#[test]
fn test_strict_mode_accepts_valid_input() -> Result<()> {
    let mut handler = handler_on(2024, 6, 15).with_strict(true);

    let summary = handler.handle_submit(&mut SubmitEvent::new("Alice", "2000-01-01"))?;

    assert_eq!(summary.eligibility, Eligibility::Eligible);
    assert_eq!(handler.target().writes(), 1);
    Ok(())
}
