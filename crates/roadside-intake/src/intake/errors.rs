use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use super::domain::IntakeField;

/// Field-level rejection. The display text is shown next to the form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please provide a more detailed location")]
    LocationTooShort,
    #[error("Location is too long")]
    LocationTooLong,
    #[error("Please include street name or area for better location accuracy")]
    LocationLacksStreet,
    #[error("Please select the type of issue you're experiencing")]
    IssueMissing,
    #[error("Please select your vehicle make")]
    VehicleMakeMissing,
    #[error("Please enter your vehicle model")]
    VehicleModelTooShort,
    #[error("Vehicle model is too long")]
    VehicleModelTooLong,
    #[error("Please include the year (e.g., 'Camry 2019')")]
    VehicleModelMissingYear,
    #[error("Please enter a valid Nigerian phone number (e.g., +234 803 123 4567 or 08031234567)")]
    InvalidPhone,
    #[error("Please enter your full name")]
    NameTooShort,
    #[error("Name is too long")]
    NameTooLong,
    #[error("Please enter your first and last name")]
    NameMissingSurname,
    #[error("Comments must be text")]
    CommentsNotText,
    #[error("Comments are too long (maximum 500 characters)")]
    CommentsTooLong,
    #[error("Please indicate the urgency level")]
    UrgencyMissing,
    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,
}

impl ValidationError {
    /// Field the rejection belongs to.
    pub fn field(&self) -> IntakeField {
        match self {
            ValidationError::LocationTooShort
            | ValidationError::LocationTooLong
            | ValidationError::LocationLacksStreet => IntakeField::Location,
            ValidationError::IssueMissing => IntakeField::Issue,
            ValidationError::VehicleMakeMissing => IntakeField::VehicleMake,
            ValidationError::VehicleModelTooShort
            | ValidationError::VehicleModelTooLong
            | ValidationError::VehicleModelMissingYear => IntakeField::VehicleModel,
            ValidationError::InvalidPhone => IntakeField::Phone,
            ValidationError::NameTooShort
            | ValidationError::NameTooLong
            | ValidationError::NameMissingSurname => IntakeField::FullName,
            ValidationError::CommentsNotText | ValidationError::CommentsTooLong => {
                IntakeField::Comments
            }
            ValidationError::UrgencyMissing => IntakeField::Urgency,
            ValidationError::TermsNotAccepted => IntakeField::AgreedToTerms,
        }
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// First violated rule per failing field, keyed in form order.
///
/// Serializes as `{ "<field>": "<message>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<IntakeField, ValidationError>);

impl FieldErrors {
    pub fn get(&self, field: IntakeField) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: IntakeField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    pub fn contains(&self, field: IntakeField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IntakeField, ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    pub fn fields(&self) -> Vec<IntakeField> {
        self.0.keys().copied().collect()
    }

    /// Keep the value of a passing rule, recording the error of a failing one.
    pub(crate) fn capture<T>(
        &mut self,
        field: IntakeField,
        outcome: Result<T, ValidationError>,
    ) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.0.entry(field).or_insert(error);
                None
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
