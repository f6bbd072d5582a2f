use thiserror::Error;

use crate::field::ContactField;

/// Reason a field was rejected. The `Display` output is the text shown to the
/// user next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidationResult {
    pub field: ContactField,
    pub error: Option<FieldError>,
}

impl FieldValidationResult {
    pub fn valid(field: ContactField) -> Self {
        Self { field, error: None }
    }

    pub fn invalid(field: ContactField, error: FieldError) -> Self {
        Self {
            field,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|err| err.to_string())
    }
}

/// Results of validating every field of the form in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation(pub [FieldValidationResult; 4]);

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(FieldValidationResult::is_valid)
    }

    pub fn results(&self) -> impl Iterator<Item = &FieldValidationResult> {
        self.0.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldValidationResult> {
        self.0.iter().filter(|x| !x.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            FieldError::Required("Subject").to_string(),
            "Subject is required"
        );
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn form_validation() {
        let validation = FormValidation([
            FieldValidationResult::valid(ContactField::Name),
            FieldValidationResult::invalid(ContactField::Email, FieldError::InvalidEmail),
            FieldValidationResult::valid(ContactField::Subject),
            FieldValidationResult::invalid(ContactField::Message, FieldError::Required("Message")),
        ]);

        assert!(!validation.is_valid());
        assert_eq!(
            validation.errors().map(|x| x.field).collect::<Vec<_>>(),
            [ContactField::Email, ContactField::Message]
        );
    }
}
