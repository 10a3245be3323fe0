use crate::infra::{read_submission, render_json};
use clap::Args;
use roadside_intake::config::OutputConfig;
use roadside_intake::error::AppError;
use roadside_intake::intake::{
    is_valid_nigerian_mobile, normalize, validate, FieldErrors, FieldFeedback, IntakeDraft,
    IntakeField, IntakeOption, IntakeRequest, IssueType, Urgency, VehicleMake,
};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding the form fields (reads stdin when omitted). Form
    /// defaults are not filled in, so omitted fields are reported as missing
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Validate the phone exactly as given instead of normalizing it first
    #[arg(long)]
    pub(crate) no_normalize: bool,
}

#[derive(Args, Debug)]
pub(crate) struct FormatPhoneArgs {
    /// Phone number as typed, e.g. "08031234567"
    pub(crate) phone: String,
    /// Fail unless the formatted number is a valid Nigerian mobile number
    #[arg(long)]
    pub(crate) check: bool,
}

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<&'a IntakeRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

#[derive(Debug, Serialize)]
struct OptionEntry {
    value: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OptionCatalog {
    issue: Vec<OptionEntry>,
    vehicle_make: Vec<OptionEntry>,
    urgency: Vec<OptionEntry>,
}

fn entries<T: IntakeOption>() -> Vec<OptionEntry> {
    T::ALL
        .iter()
        .map(|option| OptionEntry {
            value: option.as_str(),
            label: option.label(),
        })
        .collect()
}

pub(crate) fn run_validate(args: ValidateArgs, output: &OutputConfig) -> Result<(), AppError> {
    let raw = read_submission(args.input.as_deref())?;

    let outcome = if args.no_normalize {
        validate(&raw)
    } else {
        IntakeDraft::from_raw(&raw).submit()
    };

    match outcome {
        Ok(request) => {
            info!(
                issue = request.issue.as_str(),
                urgency = request.urgency.as_str(),
                "request accepted"
            );
            let report = ValidationReport {
                valid: true,
                request: Some(&request),
                errors: None,
            };
            println!("{}", render_json(&report, output)?);
            Ok(())
        }
        Err(errors) => {
            warn!(rejected = errors.len(), "request rejected");
            let report = ValidationReport {
                valid: false,
                request: None,
                errors: Some(&errors),
            };
            println!("{}", render_json(&report, output)?);
            Err(AppError::Rejected(errors))
        }
    }
}

pub(crate) fn run_format_phone(args: FormatPhoneArgs) -> Result<(), AppError> {
    let formatted = normalize(&args.phone);
    println!("{formatted}");

    if args.check && !is_valid_nigerian_mobile(&formatted) {
        return Err(AppError::InvalidInput(format!(
            "'{}' is not a valid Nigerian mobile number",
            args.phone
        )));
    }

    Ok(())
}

pub(crate) fn run_options(output: &OutputConfig) -> Result<(), AppError> {
    let catalog = OptionCatalog {
        issue: entries::<IssueType>(),
        vehicle_make: entries::<VehicleMake>(),
        urgency: entries::<Urgency>(),
    };
    println!("{}", render_json(&catalog, output)?);
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Roadside request form walkthrough");

    let mut draft = IntakeDraft::new();
    let steps: [(IntakeField, Value); 14] = [
        (IntakeField::FullName, "Adunni".into()),
        (IntakeField::FullName, "Adunni Okafor".into()),
        (IntakeField::Phone, "0803".into()),
        (IntakeField::Phone, "08031234567".into()),
        (IntakeField::VehicleMake, "toyota".into()),
        (IntakeField::VehicleModel, "Camry".into()),
        (IntakeField::VehicleModel, "Camry 2019".into()),
        (IntakeField::Location, "Lekki Phase 1".into()),
        (IntakeField::Location, "12 Admiralty Way, Lekki Phase 1, Lagos".into()),
        (IntakeField::Issue, "flat-tire".into()),
        (IntakeField::Urgency, "medium".into()),
        (IntakeField::HasSpare, true.into()),
        (
            IntakeField::Comments,
            "Parked on the shoulder near the toll gate".into(),
        ),
        (IntakeField::AgreedToTerms, true.into()),
    ];

    for (field, value) in steps {
        let feedback = draft.set(field, value);
        print_feedback(&feedback);

        if field == IntakeField::Urgency {
            let pending = draft.errors();
            println!("  submit blocked: {pending}");
        }
    }

    let request = draft.submit()?;
    println!(
        "\nSubmitted {} request for {} ({} {}), urgency {}",
        request.issue.label(),
        request.full_name,
        request.vehicle_make.label(),
        request.vehicle_model,
        request.urgency.as_str()
    );
    println!("- contact: {}", request.phone);
    println!("- location: {}", request.location);
    if let Some(spare) = request.spare_tire() {
        println!("- spare on hand: {}", if spare { "yes" } else { "no" });
    }
    if let Some(comments) = &request.comments {
        println!("- notes: {comments}");
    }

    Ok(())
}

fn print_feedback(feedback: &FieldFeedback) {
    match &feedback.error {
        None => println!("- {} = {} (ok)", feedback.field, feedback.value),
        Some(error) => println!("- {} = {} ({error})", feedback.field, feedback.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_catalog_lists_wire_values_with_labels() {
        let catalog = OptionCatalog {
            issue: entries::<IssueType>(),
            vehicle_make: entries::<VehicleMake>(),
            urgency: entries::<Urgency>(),
        };

        let payload = serde_json::to_value(&catalog).expect("catalog serializes");
        assert_eq!(payload["issue"][0]["value"], "flat-tire");
        assert_eq!(payload["vehicleMake"][6]["label"], "BMW");
        assert_eq!(payload["urgency"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn format_phone_check_rejects_partial_numbers() {
        let args = FormatPhoneArgs {
            phone: "0803".to_string(),
            check: true,
        };
        assert!(matches!(run_format_phone(args), Err(AppError::InvalidInput(_))));

        let args = FormatPhoneArgs {
            phone: "+2348031234567".to_string(),
            check: true,
        };
        assert!(run_format_phone(args).is_ok());
    }

    #[test]
    fn demo_session_submits() {
        run_demo().expect("scripted session ends in a valid request");
    }
}
