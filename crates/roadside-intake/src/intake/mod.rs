//! Roadside-assistance request intake: field rules, the validator that applies
//! them, Nigerian phone formatting, and the editable draft that sequences
//! normalization before validation.

pub mod domain;
pub mod draft;
pub mod errors;
pub mod phone;
pub(crate) mod rules;
mod text;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{
    IntakeField, IntakeOption, IntakeRequest, IssueType, RawIntake, Urgency, VehicleMake,
};
pub use draft::{FieldFeedback, IntakeDraft};
pub use errors::{FieldErrors, ValidationError};
pub use phone::{is_valid_nigerian_mobile, normalize};
pub use validator::{validate, RequestValidator};
