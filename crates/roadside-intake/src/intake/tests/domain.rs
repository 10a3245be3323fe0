use serde_json::json;

use crate::intake::domain::{IntakeField, IntakeOption, IssueType, Urgency, VehicleMake};

fn assert_wire_names_match_serde<T>()
where
    T: IntakeOption + serde::Serialize + std::fmt::Debug,
{
    for option in T::ALL {
        let encoded = serde_json::to_value(option).expect("option serializes");
        assert_eq!(encoded, json!(option.as_str()), "{option:?}");
    }
}

#[test]
fn serde_names_match_form_literals() {
    assert_wire_names_match_serde::<IssueType>();
    assert_wire_names_match_serde::<VehicleMake>();
    assert_wire_names_match_serde::<Urgency>();

    for field in IntakeField::ALL {
        let encoded = serde_json::to_value(field).expect("field serializes");
        assert_eq!(encoded, json!(field.as_str()));
    }
}

#[test]
fn option_lists_match_the_request_form() {
    let issues: Vec<_> = IssueType::ALL
        .iter()
        .map(<IssueType as IntakeOption>::as_str)
        .collect();
    assert_eq!(
        issues,
        [
            "flat-tire",
            "dead-battery",
            "towing",
            "out-of-fuel",
            "lockout",
            "engine-trouble",
            "overheating",
            "other"
        ]
    );
    assert_eq!(VehicleMake::ALL.len(), 14);
    assert_eq!(VehicleMake::from_wire("mercedes"), Some(VehicleMake::Mercedes));
    assert_eq!(VehicleMake::Mercedes.label(), "Mercedes-Benz");
    assert_eq!(Urgency::from_wire("urgent"), None);
}

#[test]
fn field_lookup_by_wire_name() {
    assert_eq!(
        IntakeField::from_wire("agreedToTerms"),
        Some(IntakeField::AgreedToTerms)
    );
    assert_eq!(IntakeField::from_wire("agreed_to_terms"), None);
    assert_eq!(IntakeField::VehicleModel.to_string(), "vehicleModel");
}
