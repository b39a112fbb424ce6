//! Registration steps

use super::field::DraftField;

/// One page of the registration wizard, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Personal,
    Contact,
    EmergencyContact,
    Account,
    Review,
}

impl Step {
    /// Number of steps in the wizard
    pub const COUNT: usize = 5;

    pub const ALL: [Step; Self::COUNT] = [
        Step::Personal,
        Step::Contact,
        Step::EmergencyContact,
        Step::Account,
        Step::Review,
    ];

    /// 1-based position of the step
    pub fn number(&self) -> usize {
        match self {
            Self::Personal => 1,
            Self::Contact => 2,
            Self::EmergencyContact => 3,
            Self::Account => 4,
            Self::Review => 5,
        }
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Following step, staying on the last one
    pub fn next(&self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(*self)
    }

    /// Preceding step, staying on the first one
    pub fn prev(&self) -> Self {
        Self::from_number(self.number() - 1).unwrap_or(*self)
    }

    pub fn is_first(&self) -> bool {
        *self == Self::Personal
    }

    pub fn is_last(&self) -> bool {
        *self == Self::Review
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Contact => "Contact Details",
            Self::EmergencyContact => "Emergency Contact",
            Self::Account => "Account",
            Self::Review => "Review & Submit",
        }
    }

    /// Fields edited on this step, in display order
    pub fn fields(&self) -> &'static [DraftField] {
        match self {
            Self::Personal => &[
                DraftField::FirstName,
                DraftField::MiddleName,
                DraftField::LastName,
                DraftField::Email,
                DraftField::DateOfBirth,
            ],
            Self::Contact => &[
                DraftField::PhonePrimary,
                DraftField::PhoneSecondary,
                DraftField::AddressLine1,
                DraftField::AddressLine2,
                DraftField::City,
                DraftField::State,
                DraftField::ZipCode,
            ],
            Self::EmergencyContact => &[
                DraftField::EmergencyName,
                DraftField::EmergencyPhone,
                DraftField::EmergencyRelationship,
            ],
            Self::Account => &[
                DraftField::Username,
                DraftField::Password,
                DraftField::ConfirmPassword,
            ],
            Self::Review => &[DraftField::MrcLevel, DraftField::AcceptTerms],
        }
    }
}
