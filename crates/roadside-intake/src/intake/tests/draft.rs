use serde_json::json;

use super::common::*;
use crate::intake::domain::IntakeField;
use crate::intake::draft::IntakeDraft;
use crate::intake::errors::ValidationError;

#[test]
fn new_draft_starts_with_form_defaults() {
    let draft = IntakeDraft::new();

    assert_eq!(draft.raw().get("hasSpare"), Some(&json!(false)));
    assert_eq!(draft.raw().get("agreedToTerms"), Some(&json!(false)));
    assert!(!draft.is_touched(IntakeField::HasSpare));
    assert!(!draft.can_submit());
    assert_eq!(
        draft.errors().get(IntakeField::AgreedToTerms),
        Some(ValidationError::TermsNotAccepted)
    );
}

#[test]
fn phone_edits_are_normalized_before_validation() {
    let mut draft = IntakeDraft::new();

    let partial = draft.set(IntakeField::Phone, "0803");
    assert_eq!(partial.value, json!("0803  "));
    assert_eq!(partial.error, Some(ValidationError::InvalidPhone));

    let complete = draft.set(IntakeField::Phone, "+2348031234567");
    assert_eq!(complete.value, json!("+234 803 123 4567"));
    assert!(complete.is_valid());
    assert!(draft.is_field_valid(IntakeField::Phone));
    assert_eq!(draft.raw().get("phone"), Some(&json!("+234 803 123 4567")));
}

#[test]
fn field_success_requires_a_touch() {
    let mut draft = IntakeDraft::new();
    assert!(!draft.is_field_valid(IntakeField::HasSpare));

    draft.set(IntakeField::HasSpare, true);
    assert!(draft.is_field_valid(IntakeField::HasSpare));

    let feedback = draft.set(IntakeField::FullName, "Adunni");
    assert_eq!(feedback.error, Some(ValidationError::NameMissingSurname));
    assert!(!draft.is_field_valid(IntakeField::FullName));
}

#[test]
fn submission_blocked_until_every_field_passes() {
    let mut raw = submission();
    raw.insert("agreedToTerms".to_string(), json!(false));
    let mut draft = IntakeDraft::from_raw(&raw);

    let blocked = draft.submit().expect_err("terms not yet accepted");
    assert_eq!(blocked.fields(), vec![IntakeField::AgreedToTerms]);

    draft.set(IntakeField::AgreedToTerms, true);
    assert!(draft.can_submit());
    let request = draft.submit().expect("draft now valid");
    assert_eq!(request.has_spare, None);
    assert_eq!(request.phone, "+234 803 123 4567");
}

#[test]
fn replaying_a_submission_normalizes_the_phone() {
    let raw = submission_with("phone", json!("0803-123-4567"));

    assert!(validator().validate(&raw).is_err());

    let draft = IntakeDraft::from_raw(&raw);
    let request = draft.submit().expect("normalized phone passes");
    assert_eq!(request.phone, "0803 123 4567");
    assert!(draft.is_touched(IntakeField::Location));
    assert!(!draft.is_touched(IntakeField::Comments));
}

#[test]
fn unknown_keys_are_ignored_when_replaying() {
    let raw = submission_with("promoCode", json!("RESCUE10"));
    let draft = IntakeDraft::from_raw(&raw);

    assert!(draft.raw().get("promoCode").is_none());
    assert!(draft.can_submit());
}

#[test]
fn replaying_does_not_inject_form_defaults() {
    let raw = submission();
    let replayed = IntakeDraft::from_raw(&raw)
        .submit()
        .expect("sample submission is valid");
    let direct = validator().validate(&raw).expect("sample submission is valid");

    assert!(IntakeDraft::from_raw(&raw).raw().get("hasSpare").is_none());
    assert_eq!(replayed, direct);
}
