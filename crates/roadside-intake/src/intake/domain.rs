use std::fmt;

use serde::{Deserialize, Serialize};

use super::phone;

/// Field-value mapping exactly as entered on the request form.
pub type RawIntake = serde_json::Map<String, serde_json::Value>;

/// Fields of an intake submission, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakeField {
    Location,
    Issue,
    VehicleMake,
    VehicleModel,
    Phone,
    FullName,
    Comments,
    Urgency,
    HasSpare,
    AgreedToTerms,
}

impl IntakeField {
    pub const ALL: [IntakeField; 10] = [
        IntakeField::Location,
        IntakeField::Issue,
        IntakeField::VehicleMake,
        IntakeField::VehicleModel,
        IntakeField::Phone,
        IntakeField::FullName,
        IntakeField::Comments,
        IntakeField::Urgency,
        IntakeField::HasSpare,
        IntakeField::AgreedToTerms,
    ];

    /// Wire name used as the key in raw submissions and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeField::Location => "location",
            IntakeField::Issue => "issue",
            IntakeField::VehicleMake => "vehicleMake",
            IntakeField::VehicleModel => "vehicleModel",
            IntakeField::Phone => "phone",
            IntakeField::FullName => "fullName",
            IntakeField::Comments => "comments",
            IntakeField::Urgency => "urgency",
            IntakeField::HasSpare => "hasSpare",
            IntakeField::AgreedToTerms => "agreedToTerms",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == value)
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of literal values accepted by a select-style field.
pub trait IntakeOption: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_wire(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.as_str() == value)
    }
}

/// Problem the motorist is reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    FlatTire,
    DeadBattery,
    Towing,
    OutOfFuel,
    Lockout,
    EngineTrouble,
    Overheating,
    Other,
}

impl IntakeOption for IssueType {
    const ALL: &'static [Self] = &[
        IssueType::FlatTire,
        IssueType::DeadBattery,
        IssueType::Towing,
        IssueType::OutOfFuel,
        IssueType::Lockout,
        IssueType::EngineTrouble,
        IssueType::Overheating,
        IssueType::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            IssueType::FlatTire => "flat-tire",
            IssueType::DeadBattery => "dead-battery",
            IssueType::Towing => "towing",
            IssueType::OutOfFuel => "out-of-fuel",
            IssueType::Lockout => "lockout",
            IssueType::EngineTrouble => "engine-trouble",
            IssueType::Overheating => "overheating",
            IssueType::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IssueType::FlatTire => "Flat Tire",
            IssueType::DeadBattery => "Dead Battery",
            IssueType::Towing => "Need Towing",
            IssueType::OutOfFuel => "Out of Fuel",
            IssueType::Lockout => "Locked Out",
            IssueType::EngineTrouble => "Engine Won't Start",
            IssueType::Overheating => "Engine Overheating",
            IssueType::Other => "Other Issue",
        }
    }
}

/// Vehicle makes commonly found on Nigerian roads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleMake {
    Toyota,
    Honda,
    Nissan,
    Hyundai,
    Kia,
    Mercedes,
    Bmw,
    Lexus,
    Ford,
    Volkswagen,
    Peugeot,
    Mazda,
    Mitsubishi,
    Other,
}

impl IntakeOption for VehicleMake {
    const ALL: &'static [Self] = &[
        VehicleMake::Toyota,
        VehicleMake::Honda,
        VehicleMake::Nissan,
        VehicleMake::Hyundai,
        VehicleMake::Kia,
        VehicleMake::Mercedes,
        VehicleMake::Bmw,
        VehicleMake::Lexus,
        VehicleMake::Ford,
        VehicleMake::Volkswagen,
        VehicleMake::Peugeot,
        VehicleMake::Mazda,
        VehicleMake::Mitsubishi,
        VehicleMake::Other,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VehicleMake::Toyota => "toyota",
            VehicleMake::Honda => "honda",
            VehicleMake::Nissan => "nissan",
            VehicleMake::Hyundai => "hyundai",
            VehicleMake::Kia => "kia",
            VehicleMake::Mercedes => "mercedes",
            VehicleMake::Bmw => "bmw",
            VehicleMake::Lexus => "lexus",
            VehicleMake::Ford => "ford",
            VehicleMake::Volkswagen => "volkswagen",
            VehicleMake::Peugeot => "peugeot",
            VehicleMake::Mazda => "mazda",
            VehicleMake::Mitsubishi => "mitsubishi",
            VehicleMake::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VehicleMake::Toyota => "Toyota",
            VehicleMake::Honda => "Honda",
            VehicleMake::Nissan => "Nissan",
            VehicleMake::Hyundai => "Hyundai",
            VehicleMake::Kia => "Kia",
            VehicleMake::Mercedes => "Mercedes-Benz",
            VehicleMake::Bmw => "BMW",
            VehicleMake::Lexus => "Lexus",
            VehicleMake::Ford => "Ford",
            VehicleMake::Volkswagen => "Volkswagen",
            VehicleMake::Peugeot => "Peugeot",
            VehicleMake::Mazda => "Mazda",
            VehicleMake::Mitsubishi => "Mitsubishi",
            VehicleMake::Other => "Other",
        }
    }
}

/// Self-declared priority; display and sorting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl IntakeOption for Urgency {
    const ALL: &'static [Self] = &[Urgency::Low, Urgency::Medium, Urgency::High];

    fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low - I have time to wait",
            Urgency::Medium => "Medium - Moderately urgent",
            Urgency::High => "High - Very urgent/unsafe location",
        }
    }
}

/// A submission that satisfied every field rule.
///
/// Only produced by the validator; `phone` keeps the submitted spelling until
/// [`IntakeRequest::with_normalized_phone`] is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    pub location: String,
    pub issue: IssueType,
    pub vehicle_make: VehicleMake,
    pub vehicle_model: String,
    pub phone: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub urgency: Urgency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_spare: Option<bool>,
    pub agreed_to_terms: bool,
}

impl IntakeRequest {
    /// Spare-tire answer, only meaningful for flat tires.
    pub fn spare_tire(&self) -> Option<bool> {
        if self.issue == IssueType::FlatTire {
            self.has_spare
        } else {
            None
        }
    }

    pub fn with_normalized_phone(mut self) -> Self {
        self.phone = phone::normalize(&self.phone);
        self
    }
}
