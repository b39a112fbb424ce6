//! The volunteer draft record and its wire representation

use super::field::{DraftField, FieldValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for the date of birth
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Medical Reserve Corps level requested by the volunteer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MrcLevel {
    #[default]
    #[serde(rename = "level_1")]
    Level1,
    #[serde(rename = "level_2")]
    Level2,
    #[serde(rename = "level_3")]
    Level3,
}

impl MrcLevel {
    pub fn next(&self) -> Self {
        match self {
            Self::Level1 => Self::Level2,
            Self::Level2 => Self::Level3,
            Self::Level3 => Self::Level1,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Level1 => Self::Level3,
            Self::Level2 => Self::Level1,
            Self::Level3 => Self::Level2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Level1 => "Level 1 (general support)",
            Self::Level2 => "Level 2 (trained responder)",
            Self::Level3 => "Level 3 (licensed professional)",
        }
    }
}

/// Emergency contact sub-record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: Option<String>,
}

/// In-progress registration, edited one field at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerDraft {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: Option<String>,
    pub phone_primary: String,
    pub phone_secondary: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact: EmergencyContact,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub mrc_level: MrcLevel,
    pub accept_terms: bool,
}

impl Default for VolunteerDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            middle_name: None,
            last_name: String::new(),
            email: String::new(),
            date_of_birth: None,
            phone_primary: String::new(),
            phone_secondary: None,
            address_line1: String::new(),
            address_line2: None,
            city: String::new(),
            state: "VA".to_string(),
            zip_code: String::new(),
            emergency_contact: EmergencyContact::default(),
            username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            mrc_level: MrcLevel::default(),
            accept_terms: false,
        }
    }
}

impl VolunteerDraft {
    /// Current text of a text field; empty for choice and toggle fields
    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::MiddleName => self.middle_name.as_deref().unwrap_or(""),
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::DateOfBirth => self.date_of_birth.as_deref().unwrap_or(""),
            DraftField::PhonePrimary => &self.phone_primary,
            DraftField::PhoneSecondary => self.phone_secondary.as_deref().unwrap_or(""),
            DraftField::AddressLine1 => &self.address_line1,
            DraftField::AddressLine2 => self.address_line2.as_deref().unwrap_or(""),
            DraftField::City => &self.city,
            DraftField::State => &self.state,
            DraftField::ZipCode => &self.zip_code,
            DraftField::EmergencyName => &self.emergency_contact.name,
            DraftField::EmergencyPhone => &self.emergency_contact.phone,
            DraftField::EmergencyRelationship => self
                .emergency_contact
                .relationship
                .as_deref()
                .unwrap_or(""),
            DraftField::Username => &self.username,
            DraftField::Password => &self.password,
            DraftField::ConfirmPassword => &self.confirm_password,
            DraftField::MrcLevel | DraftField::AcceptTerms => "",
        }
    }

    pub fn value(&self, field: DraftField) -> FieldValue {
        match field {
            DraftField::MrcLevel => FieldValue::Level(self.mrc_level),
            DraftField::AcceptTerms => FieldValue::Toggle(self.accept_terms),
            other => FieldValue::Text(self.text(other).to_string()),
        }
    }

    /// Write a value into the draft.
    ///
    /// Returns false, leaving the draft untouched, when the value kind
    /// does not match the field.
    pub fn set(&mut self, field: DraftField, value: FieldValue) -> bool {
        match (field, value) {
            (DraftField::MrcLevel, FieldValue::Level(level)) => self.mrc_level = level,
            (DraftField::AcceptTerms, FieldValue::Toggle(accepted)) => self.accept_terms = accepted,
            (DraftField::MrcLevel | DraftField::AcceptTerms, _) => return false,
            (_, FieldValue::Level(_) | FieldValue::Toggle(_)) => return false,
            (field, FieldValue::Text(text)) => match field {
                DraftField::FirstName => self.first_name = text,
                DraftField::MiddleName => self.middle_name = optional(text),
                DraftField::LastName => self.last_name = text,
                DraftField::Email => self.email = text,
                DraftField::DateOfBirth => self.date_of_birth = optional(text),
                DraftField::PhonePrimary => self.phone_primary = text,
                DraftField::PhoneSecondary => self.phone_secondary = optional(text),
                DraftField::AddressLine1 => self.address_line1 = text,
                DraftField::AddressLine2 => self.address_line2 = optional(text),
                DraftField::City => self.city = text,
                DraftField::State => self.state = text,
                DraftField::ZipCode => self.zip_code = text,
                DraftField::EmergencyName => self.emergency_contact.name = text,
                DraftField::EmergencyPhone => self.emergency_contact.phone = text,
                DraftField::EmergencyRelationship => {
                    self.emergency_contact.relationship = optional(text)
                }
                DraftField::Username => self.username = text,
                DraftField::Password => self.password = text,
                DraftField::ConfirmPassword => self.confirm_password = text,
                DraftField::MrcLevel | DraftField::AcceptTerms => return false,
            },
        }
        true
    }

    /// Value as shown on screen, with secrets masked
    pub fn display_value(&self, field: DraftField) -> String {
        match field {
            DraftField::Password | DraftField::ConfirmPassword => {
                "•".repeat(self.text(field).chars().count())
            }
            DraftField::MrcLevel => self.mrc_level.label().to_string(),
            DraftField::AcceptTerms => {
                if self.accept_terms {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            other => self.text(other).to_string(),
        }
    }

    /// Build the submission payload, leaving out write-only fields
    pub fn to_registration(&self, tenant_id: i64) -> VolunteerRegistration {
        VolunteerRegistration {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            middle_name: trimmed(&self.middle_name),
            last_name: self.last_name.trim().to_string(),
            date_of_birth: trimmed(&self.date_of_birth)
                .and_then(|d| NaiveDate::parse_from_str(&d, DATE_FORMAT).ok()),
            phone_primary: Some(self.phone_primary.trim().to_string()),
            phone_secondary: trimmed(&self.phone_secondary),
            address_line1: Some(self.address_line1.trim().to_string()),
            address_line2: trimmed(&self.address_line2),
            city: Some(self.city.trim().to_string()),
            state: self.state.trim().to_ascii_uppercase(),
            zip_code: Some(self.zip_code.trim().to_string()),
            emergency_contact_name: Some(self.emergency_contact.name.trim().to_string()),
            emergency_contact_phone: Some(self.emergency_contact.phone.trim().to_string()),
            emergency_contact_relationship: trimmed(&self.emergency_contact.relationship),
            password: self.password.clone(),
            tenant_id,
            mrc_level: self.mrc_level,
        }
    }
}

fn optional(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Registration payload accepted by the volunteer endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerRegistration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_primary: Option<String>,
    pub phone_secondary: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: String,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub password: String,
    pub tenant_id: i64,
    pub mrc_level: MrcLevel,
}

impl std::fmt::Debug for VolunteerRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolunteerRegistration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("tenant_id", &self.tenant_id)
            .field("mrc_level", &self.mrc_level)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}
