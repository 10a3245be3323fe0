use serde_json::{json, Value};

use crate::intake::domain::RawIntake;
use crate::intake::validator::RequestValidator;

pub(super) fn validator() -> RequestValidator {
    RequestValidator::new()
}

pub(super) fn submission() -> RawIntake {
    match json!({
        "location": "12 Admiralty Way, Lekki Phase 1, Lagos",
        "issue": "flat-tire",
        "vehicleMake": "toyota",
        "vehicleModel": "Camry 2019",
        "phone": "+234 803 123 4567",
        "fullName": "Adunni Okafor",
        "urgency": "medium",
        "agreedToTerms": true,
    }) {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

pub(super) fn submission_with(field: &str, value: Value) -> RawIntake {
    let mut raw = submission();
    raw.insert(field.to_string(), value);
    raw
}

pub(super) fn submission_without(field: &str) -> RawIntake {
    let mut raw = submission();
    raw.remove(field);
    raw
}
