//! Form field identifiers and value objects

use super::draft::MrcLevel;

/// Kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text rendered masked
    Secret,
    /// One of the MRC levels
    Choice,
    /// Checkbox
    Toggle,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Level(MrcLevel),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Identifies a single field of the volunteer draft.
///
/// Declaration order is display order, so ordered maps keyed by
/// `DraftField` list errors the way the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    FirstName,
    MiddleName,
    LastName,
    Email,
    DateOfBirth,
    PhonePrimary,
    PhoneSecondary,
    AddressLine1,
    AddressLine2,
    City,
    State,
    ZipCode,
    EmergencyName,
    EmergencyPhone,
    EmergencyRelationship,
    Username,
    Password,
    ConfirmPassword,
    MrcLevel,
    AcceptTerms,
}

impl DraftField {
    /// Machine name, matching the backend field where one exists
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::MiddleName => "middle_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::DateOfBirth => "date_of_birth",
            Self::PhonePrimary => "phone_primary",
            Self::PhoneSecondary => "phone_secondary",
            Self::AddressLine1 => "address_line1",
            Self::AddressLine2 => "address_line2",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zip_code",
            Self::EmergencyName => "emergency_contact_name",
            Self::EmergencyPhone => "emergency_contact_phone",
            Self::EmergencyRelationship => "emergency_contact_relationship",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::MrcLevel => "mrc_level",
            Self::AcceptTerms => "accept_terms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name (optional)",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::DateOfBirth => "Date of Birth (YYYY-MM-DD, optional)",
            Self::PhonePrimary => "Primary Phone",
            Self::PhoneSecondary => "Secondary Phone (optional)",
            Self::AddressLine1 => "Address",
            Self::AddressLine2 => "Address Line 2 (optional)",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "ZIP Code",
            Self::EmergencyName => "Contact Name",
            Self::EmergencyPhone => "Contact Phone",
            Self::EmergencyRelationship => "Relationship (optional)",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::MrcLevel => "MRC Level",
            Self::AcceptTerms => "I agree to the volunteer terms",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Password | Self::ConfirmPassword => FieldKind::Secret,
            Self::MrcLevel => FieldKind::Choice,
            Self::AcceptTerms => FieldKind::Toggle,
            _ => FieldKind::Text,
        }
    }

    /// Fields that are used locally and never sent to the backend
    pub fn is_write_only(&self) -> bool {
        matches!(self, Self::ConfirmPassword | Self::AcceptTerms)
    }

    /// Whether the field accepts typed characters
    pub fn is_text(&self) -> bool {
        matches!(self.kind(), FieldKind::Text | FieldKind::Secret)
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
