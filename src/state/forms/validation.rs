//! Step-scoped validation of the volunteer draft

use super::draft::{VolunteerDraft, DATE_FORMAT};
use super::field::DraftField;
use super::step::Step;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub const NAME_MAX_LEN: usize = 100;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 100;
pub const PASSWORD_MIN_LEN: usize = 8;
const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;
const EARLIEST_BIRTH_YEAR: i32 = 1900;

/// Field-scoped validation messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<DraftField, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the first error reported for a field
    fn report(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, field: DraftField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validate the fields owned by `step`. Empty result means the step is valid.
pub fn validate_step(step: Step, draft: &VolunteerDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();
    match step {
        Step::Personal => {
            require_name(&mut errors, DraftField::FirstName, &draft.first_name, "First name");
            require_name(&mut errors, DraftField::LastName, &draft.last_name, "Last name");
            let email = draft.email.trim();
            if email.is_empty() {
                errors.report(DraftField::Email, "Email is required");
            } else if !is_valid_email(email) {
                errors.report(DraftField::Email, "Enter a valid email address");
            }
            if let Some(dob) = draft.date_of_birth.as_deref().map(str::trim) {
                if !dob.is_empty() && !is_valid_birth_date(dob) {
                    errors.report(
                        DraftField::DateOfBirth,
                        "Date of birth must be a valid date in YYYY-MM-DD format",
                    );
                }
            }
        }
        Step::Contact => {
            require_phone(
                &mut errors,
                DraftField::PhonePrimary,
                &draft.phone_primary,
                "Primary phone",
            );
            if let Some(secondary) = draft.phone_secondary.as_deref() {
                if !secondary.trim().is_empty() && !is_valid_phone(secondary) {
                    errors.report(
                        DraftField::PhoneSecondary,
                        "Secondary phone must contain 10 to 15 digits",
                    );
                }
            }
            if draft.address_line1.trim().is_empty() {
                errors.report(DraftField::AddressLine1, "Address is required");
            }
            if draft.city.trim().is_empty() {
                errors.report(DraftField::City, "City is required");
            }
            let state = draft.state.trim();
            if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
                errors.report(DraftField::State, "State must be a two-letter code");
            }
            let zip = draft.zip_code.trim();
            if zip.is_empty() {
                errors.report(DraftField::ZipCode, "ZIP code is required");
            } else if !is_valid_zip(zip) {
                errors.report(DraftField::ZipCode, "ZIP code must be 12345 or 12345-6789");
            }
        }
        Step::EmergencyContact => {
            if draft.emergency_contact.name.trim().is_empty() {
                errors.report(DraftField::EmergencyName, "Emergency contact name is required");
            }
            require_phone(
                &mut errors,
                DraftField::EmergencyPhone,
                &draft.emergency_contact.phone,
                "Emergency contact phone",
            );
        }
        Step::Account => {
            let username = draft.username.trim();
            let len = username.chars().count();
            if len < USERNAME_MIN_LEN || len > USERNAME_MAX_LEN {
                errors.report(
                    DraftField::Username,
                    format!(
                        "Username must be between {} and {} characters",
                        USERNAME_MIN_LEN, USERNAME_MAX_LEN
                    ),
                );
            } else if !username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            {
                errors.report(
                    DraftField::Username,
                    "Username may only contain letters, digits, '.', '_' and '-'",
                );
            }
            if draft.password.chars().count() < PASSWORD_MIN_LEN {
                errors.report(
                    DraftField::Password,
                    format!("Password must be at least {PASSWORD_MIN_LEN} characters"),
                );
            }
            if draft.confirm_password != draft.password {
                errors.report(DraftField::ConfirmPassword, "Passwords do not match");
            }
        }
        Step::Review => {
            if !draft.accept_terms {
                errors.report(
                    DraftField::AcceptTerms,
                    "You must accept the volunteer terms to register",
                );
            }
        }
    }
    errors
}

fn require_name(errors: &mut ErrorMap, field: DraftField, value: &str, label: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.report(field, format!("{label} is required"));
    } else if value.chars().count() > NAME_MAX_LEN {
        errors.report(
            field,
            format!("{label} must be at most {NAME_MAX_LEN} characters"),
        );
    }
}

fn require_phone(errors: &mut ErrorMap, field: DraftField, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.report(field, format!("{label} is required"));
    } else if !is_valid_phone(value) {
        errors.report(field, format!("{label} must contain 10 to 15 digits"));
    }
}

/// Structural email check: one `@`, no whitespace, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// Digits with optional `space - . ( ) +` separators
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')' | '+'))
    {
        return false;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}

pub fn is_valid_zip(zip: &str) -> bool {
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    match zip.split_once('-') {
        None => zip.len() == 5 && all_digits(zip),
        Some((head, tail)) => {
            head.len() == 5 && tail.len() == 4 && all_digits(head) && all_digits(tail)
        }
    }
}

fn is_valid_birth_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.year() >= EARLIEST_BIRTH_YEAR)
        .unwrap_or(false)
}
