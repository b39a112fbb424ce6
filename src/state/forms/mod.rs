//! Form domain layer
//!
//! Type-safe registration draft, step-scoped validation and the wizard
//! controller that sequences the steps.

mod draft;
mod field;
mod step;
mod validation;
mod wizard;

pub use draft::{MrcLevel, VolunteerDraft, VolunteerRegistration};
pub use field::{DraftField, FieldKind, FieldValue};
pub use step::Step;
pub use wizard::{RegistrationWizard, WizardPhase};
