use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use super::domain::{IntakeField, IntakeRequest, RawIntake};
use super::errors::{FieldErrors, ValidationError};
use super::phone;
use super::validator::RequestValidator;

/// Result of editing one field: what was stored and whether it passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFeedback {
    pub field: IntakeField,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl FieldFeedback {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// In-progress request form.
///
/// Phone edits are normalized before they are stored and re-validated, and
/// submission stays blocked until the whole draft validates.
#[derive(Debug, Clone)]
pub struct IntakeDraft {
    values: RawIntake,
    touched: BTreeSet<IntakeField>,
    validator: RequestValidator,
}

impl Default for IntakeDraft {
    fn default() -> Self {
        let mut draft = Self::blank();
        draft
            .values
            .insert(IntakeField::HasSpare.as_str().to_string(), Value::Bool(false));
        draft.values.insert(
            IntakeField::AgreedToTerms.as_str().to_string(),
            Value::Bool(false),
        );
        draft
    }
}

impl IntakeDraft {
    /// Empty form carrying the request form's defaults (`hasSpare` and
    /// `agreedToTerms` unchecked).
    pub fn new() -> Self {
        Self::default()
    }

    fn blank() -> Self {
        Self {
            values: RawIntake::new(),
            touched: BTreeSet::new(),
            validator: RequestValidator::new(),
        }
    }

    /// Replay a complete submission through [`IntakeDraft::set`], in form order.
    /// Form defaults are not applied, so fields left out stay absent. Unknown
    /// keys are ignored.
    pub fn from_raw(raw: &RawIntake) -> Self {
        let mut draft = Self::blank();
        for field in IntakeField::ALL {
            if let Some(value) = raw.get(field.as_str()) {
                draft.set(field, value.clone());
            }
        }
        draft
    }

    pub fn set(&mut self, field: IntakeField, value: impl Into<Value>) -> FieldFeedback {
        let value = match (field, value.into()) {
            (IntakeField::Phone, Value::String(typed)) => Value::String(phone::normalize(&typed)),
            (_, other) => other,
        };

        self.values
            .insert(field.as_str().to_string(), value.clone());
        self.touched.insert(field);

        let error = self.validator.validate_field(field, &self.values).err();
        trace!(%field, valid = error.is_none(), "draft field updated");

        FieldFeedback {
            field,
            value,
            error,
        }
    }

    pub fn is_touched(&self, field: IntakeField) -> bool {
        self.touched.contains(&field)
    }

    /// Touched and currently passing, i.e. the field shows a success state.
    pub fn is_field_valid(&self, field: IntakeField) -> bool {
        self.is_touched(field) && self.validator.validate_field(field, &self.values).is_ok()
    }

    pub fn errors(&self) -> FieldErrors {
        self.validator.validate(&self.values).err().unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn submit(&self) -> Result<IntakeRequest, FieldErrors> {
        self.validator.validate(&self.values)
    }

    pub fn raw(&self) -> &RawIntake {
        &self.values
    }
}
