use tracing::debug;

use super::domain::{IntakeField, IntakeRequest, RawIntake};
use super::errors::{FieldErrors, ValidationError};
use super::rules;

/// Stateless validator applying the request-help rules to a raw submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check every field independently and build the typed request only when
    /// all of them pass.
    pub fn validate(&self, raw: &RawIntake) -> Result<IntakeRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let location = errors.capture(IntakeField::Location, rules::location(raw));
        let issue = errors.capture(IntakeField::Issue, rules::issue(raw));
        let vehicle_make = errors.capture(IntakeField::VehicleMake, rules::vehicle_make(raw));
        let vehicle_model = errors.capture(IntakeField::VehicleModel, rules::vehicle_model(raw));
        let phone = errors.capture(IntakeField::Phone, rules::phone(raw));
        let full_name = errors.capture(IntakeField::FullName, rules::full_name(raw));
        let comments = errors.capture(IntakeField::Comments, rules::comments(raw));
        let urgency = errors.capture(IntakeField::Urgency, rules::urgency(raw));
        let has_spare = rules::has_spare(raw);
        let agreed_to_terms =
            errors.capture(IntakeField::AgreedToTerms, rules::agreed_to_terms(raw));

        match (
            location,
            issue,
            vehicle_make,
            vehicle_model,
            phone,
            full_name,
            comments,
            urgency,
            agreed_to_terms,
        ) {
            (
                Some(location),
                Some(issue),
                Some(vehicle_make),
                Some(vehicle_model),
                Some(phone),
                Some(full_name),
                Some(comments),
                Some(urgency),
                Some(agreed_to_terms),
            ) => {
                debug!(issue = ?issue, urgency = ?urgency, "intake submission accepted");
                Ok(IntakeRequest {
                    location,
                    issue,
                    vehicle_make,
                    vehicle_model,
                    phone,
                    full_name,
                    comments,
                    urgency,
                    has_spare,
                    agreed_to_terms,
                })
            }
            _ => {
                for (field, error) in errors.iter() {
                    debug!(%field, reason = %error, "intake field rejected");
                }
                debug!(rejected = errors.len(), "intake submission rejected");
                Err(errors)
            }
        }
    }

    /// Run the rule for a single field, for inline feedback while editing.
    pub fn validate_field(
        &self,
        field: IntakeField,
        raw: &RawIntake,
    ) -> Result<(), ValidationError> {
        match field {
            IntakeField::Location => rules::location(raw).map(drop),
            IntakeField::Issue => rules::issue(raw).map(drop),
            IntakeField::VehicleMake => rules::vehicle_make(raw).map(drop),
            IntakeField::VehicleModel => rules::vehicle_model(raw).map(drop),
            IntakeField::Phone => rules::phone(raw).map(drop),
            IntakeField::FullName => rules::full_name(raw).map(drop),
            IntakeField::Comments => rules::comments(raw).map(drop),
            IntakeField::Urgency => rules::urgency(raw).map(drop),
            IntakeField::HasSpare => Ok(()),
            IntakeField::AgreedToTerms => rules::agreed_to_terms(raw).map(drop),
        }
    }
}

/// Shorthand for [`RequestValidator::validate`].
pub fn validate(raw: &RawIntake) -> Result<IntakeRequest, FieldErrors> {
    RequestValidator::new().validate(raw)
}
