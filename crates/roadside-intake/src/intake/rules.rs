use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::domain::{IntakeField, IntakeOption, IssueType, RawIntake, Urgency, VehicleMake};
use super::errors::ValidationError;
use super::phone::is_valid_nigerian_mobile;
use super::text::{field_length, trim_form};

/// Four consecutive ASCII digits, i.e. a model year such as "2019".
static YEAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("year token pattern compiles"));

const STREET_MARKERS: [&str; 3] = ["street", "road", "avenue"];

const LOCATION_LENGTH: LengthBounds = LengthBounds::new(10, 200);
const VEHICLE_MODEL_LENGTH: LengthBounds = LengthBounds::new(2, 50);
const FULL_NAME_LENGTH: LengthBounds = LengthBounds::new(2, 100);
const COMMENTS_MAX_LENGTH: usize = 500;

/// Inclusive length range for a text field, in UTF-16 code units.
#[derive(Debug, Clone, Copy)]
struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn check(
        &self,
        value: &str,
        too_short: ValidationError,
        too_long: ValidationError,
    ) -> Result<(), ValidationError> {
        let length = field_length(value);
        if length < self.min {
            Err(too_short)
        } else if length > self.max {
            Err(too_long)
        } else {
            Ok(())
        }
    }
}

fn text(raw: &RawIntake, field: IntakeField) -> Option<&str> {
    raw.get(field.as_str()).and_then(Value::as_str)
}

fn choice<T: IntakeOption>(
    raw: &RawIntake,
    field: IntakeField,
    missing: ValidationError,
) -> Result<T, ValidationError> {
    text(raw, field).and_then(T::from_wire).ok_or(missing)
}

pub(crate) fn location(raw: &RawIntake) -> Result<String, ValidationError> {
    let value = text(raw, IntakeField::Location).ok_or(ValidationError::LocationTooShort)?;
    LOCATION_LENGTH.check(
        value,
        ValidationError::LocationTooShort,
        ValidationError::LocationTooLong,
    )?;

    let pinpointed =
        value.contains(',') || STREET_MARKERS.iter().any(|marker| value.contains(*marker));
    if !pinpointed {
        return Err(ValidationError::LocationLacksStreet);
    }

    Ok(value.to_string())
}

pub(crate) fn issue(raw: &RawIntake) -> Result<IssueType, ValidationError> {
    choice(raw, IntakeField::Issue, ValidationError::IssueMissing)
}

pub(crate) fn vehicle_make(raw: &RawIntake) -> Result<VehicleMake, ValidationError> {
    choice(raw, IntakeField::VehicleMake, ValidationError::VehicleMakeMissing)
}

pub(crate) fn vehicle_model(raw: &RawIntake) -> Result<String, ValidationError> {
    let value =
        text(raw, IntakeField::VehicleModel).ok_or(ValidationError::VehicleModelTooShort)?;
    VEHICLE_MODEL_LENGTH.check(
        value,
        ValidationError::VehicleModelTooShort,
        ValidationError::VehicleModelTooLong,
    )?;

    if !YEAR_TOKEN.is_match(value) {
        return Err(ValidationError::VehicleModelMissingYear);
    }

    Ok(value.to_string())
}

pub(crate) fn phone(raw: &RawIntake) -> Result<String, ValidationError> {
    match text(raw, IntakeField::Phone) {
        Some(value) if is_valid_nigerian_mobile(value) => Ok(value.to_string()),
        _ => Err(ValidationError::InvalidPhone),
    }
}

pub(crate) fn full_name(raw: &RawIntake) -> Result<String, ValidationError> {
    let value = text(raw, IntakeField::FullName).ok_or(ValidationError::NameTooShort)?;
    FULL_NAME_LENGTH.check(
        value,
        ValidationError::NameTooShort,
        ValidationError::NameTooLong,
    )?;

    // Split on the space character itself; "Ade  O" yields three pieces.
    if trim_form(value).split(' ').count() < 2 {
        return Err(ValidationError::NameMissingSurname);
    }

    Ok(value.to_string())
}

pub(crate) fn comments(raw: &RawIntake) -> Result<Option<String>, ValidationError> {
    match raw.get(IntakeField::Comments.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => {
            if field_length(value) > COMMENTS_MAX_LENGTH {
                Err(ValidationError::CommentsTooLong)
            } else {
                Ok(Some(value.clone()))
            }
        }
        Some(_) => Err(ValidationError::CommentsNotText),
    }
}

pub(crate) fn urgency(raw: &RawIntake) -> Result<Urgency, ValidationError> {
    choice(raw, IntakeField::Urgency, ValidationError::UrgencyMissing)
}

/// Never rejects; non-boolean values read as unanswered.
pub(crate) fn has_spare(raw: &RawIntake) -> Option<bool> {
    raw.get(IntakeField::HasSpare.as_str())
        .and_then(Value::as_bool)
}

pub(crate) fn agreed_to_terms(raw: &RawIntake) -> Result<bool, ValidationError> {
    match raw.get(IntakeField::AgreedToTerms.as_str()) {
        Some(Value::Bool(true)) => Ok(true),
        _ => Err(ValidationError::TermsNotAccepted),
    }
}
