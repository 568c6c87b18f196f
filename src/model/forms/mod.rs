//! Validation for the mock login and complaint forms.
//!
//! Each form is accepted as raw strings and either validates into a typed
//! value or reports the first problem found, in the order the checks run.

mod complaint;
mod fields;
mod login;

pub use complaint::{Complaint, ComplaintForm, ComplaintType};
pub use fields::{Aadhaar, Email, Phone};
pub use login::{Login, LoginForm};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid 12-digit Aadhaar number")]
    InvalidAadhaar,
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Unknown complaint type `{0}`")]
    UnknownComplaintType(String),
}

/// Trimmed-empty counts as missing.
fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}
