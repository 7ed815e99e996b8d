//! Add-contact validation
//!
//! Three independent rules, all checked against trimmed input:
//! - name has at least two characters
//! - phone is present
//! - email contains `@` (a shape check only)

use thiserror::Error;

use crate::constants::{INVALID_CONTACT_MESSAGE, MIN_NAME_CHARS};
use crate::models::{DraftContact, DraftField, NewContact};

/// A single broken rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Name must be at least {} characters", MIN_NAME_CHARS)]
    NameTooShort,
    #[error("Phone is required")]
    EmptyPhone,
    #[error("Email must contain @")]
    InvalidEmail,
}

impl ContactValidationError {
    /// Field the rule applies to
    pub fn field(&self) -> DraftField {
        match self {
            ContactValidationError::NameTooShort => DraftField::Name,
            ContactValidationError::EmptyPhone => DraftField::Phone,
            ContactValidationError::InvalidEmail => DraftField::Email,
        }
    }
}

/// Every rule a draft broke. Displays as the joint form message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_CONTACT_MESSAGE)]
pub struct ValidationFailure {
    pub errors: Vec<ContactValidationError>,
}

impl ValidationFailure {
    /// Per-field message, if that field broke a rule
    pub fn error_for(&self, field: DraftField) -> Option<ContactValidationError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }
}

pub fn validate_name(name: &str) -> Result<(), ContactValidationError> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ContactValidationError::NameTooShort);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ContactValidationError> {
    if phone.trim().is_empty() {
        return Err(ContactValidationError::EmptyPhone);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ContactValidationError> {
    if !email.trim().contains('@') {
        return Err(ContactValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a draft, returning the trimmed contact on success.
pub fn validate(draft: &DraftContact) -> Result<NewContact, ValidationFailure> {
    let errors: Vec<ContactValidationError> = [
        validate_name(&draft.name),
        validate_phone(&draft.phone),
        validate_email(&draft.email),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if !errors.is_empty() {
        return Err(ValidationFailure { errors });
    }

    Ok(NewContact {
        name: draft.name.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        email: draft.email.trim().to_string(),
    })
}
