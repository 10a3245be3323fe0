//! End-to-end checks for the request-help intake through the public API:
//! phone formatting, whole-submission validation, and the draft flow.

use roadside_intake::intake::{
    normalize, validate, IntakeDraft, IntakeField, IssueType, RawIntake, RequestValidator,
};
use serde_json::{json, Value};

fn raw(value: Value) -> RawIntake {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn lekki_breakdown() -> RawIntake {
    raw(json!({
        "location": "12 Admiralty Way, Lekki Phase 1, Lagos",
        "issue": "flat-tire",
        "vehicleMake": "toyota",
        "vehicleModel": "Camry 2019",
        "phone": "+234 803 123 4567",
        "fullName": "Adunni Okafor",
        "urgency": "medium",
        "agreedToTerms": true,
    }))
}

#[test]
fn canonical_numbers_survive_renormalization() {
    for typed in ["+2348031234567", "2347011234567", "08091234567", "0 905 000 1111"] {
        let once = normalize(typed);
        assert_eq!(normalize(&once), once, "{typed}");
    }
}

#[test]
fn foreign_or_partial_input_passes_through_untouched() {
    for typed in ["", "+", "+44 20 7946 0958", "803 123 4567", "abc", "1-800-FLOWERS"] {
        assert_eq!(normalize(typed), typed);
    }
}

#[test]
fn sample_submission_validates_and_serializes_with_wire_names() {
    let request = validate(&lekki_breakdown()).expect("sample is valid");
    assert_eq!(request.issue, IssueType::FlatTire);

    let payload = serde_json::to_value(&request).expect("request serializes");
    assert_eq!(
        payload,
        json!({
            "location": "12 Admiralty Way, Lekki Phase 1, Lagos",
            "issue": "flat-tire",
            "vehicleMake": "toyota",
            "vehicleModel": "Camry 2019",
            "phone": "+234 803 123 4567",
            "fullName": "Adunni Okafor",
            "urgency": "medium",
            "agreedToTerms": true,
        })
    );
}

#[test]
fn multiple_failures_are_reported_together() {
    let mut submission = lekki_breakdown();
    submission.insert("vehicleModel".into(), json!("Camry"));
    submission.insert("fullName".into(), json!("Adunni"));
    submission.insert("phone".into(), json!("0803123456"));

    let errors = RequestValidator::new()
        .validate(&submission)
        .expect_err("three fields fail");

    assert_eq!(
        errors.fields(),
        vec![
            IntakeField::VehicleModel,
            IntakeField::Phone,
            IntakeField::FullName
        ]
    );
}

#[test]
fn typing_session_reaches_a_submittable_request() {
    let mut draft = IntakeDraft::new();

    draft.set(IntakeField::Location, "Ikeja");
    assert!(!draft.is_field_valid(IntakeField::Location));
    draft.set(IntakeField::Location, "Allen Avenue, Ikeja");
    draft.set(IntakeField::Issue, "dead-battery");
    draft.set(IntakeField::VehicleMake, "honda");
    draft.set(IntakeField::VehicleModel, "Accord 2012");
    draft.set(IntakeField::Phone, "0811");
    draft.set(IntakeField::Phone, "08112223333");
    draft.set(IntakeField::FullName, "Chidi Eze");
    draft.set(IntakeField::Urgency, "high");
    assert!(!draft.can_submit());

    draft.set(IntakeField::AgreedToTerms, true);
    let request = draft.submit().expect("draft complete");

    assert_eq!(request.phone, "0811 222 3333");
    assert_eq!(request.spare_tire(), None);
}
