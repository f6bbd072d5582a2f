//! Field validation. Every function looks at a single value and never at
//! other fields.

use contact_form_models::{
    field::{trim_input, ContactField, FormFields},
    validation::{FieldError, FieldValidationResult, FormValidation},
    EMAIL_REGEX,
};

/// Returns whether `value` contains anything besides whitespace.
pub fn is_required_present(value: &str) -> bool {
    !trim_input(value).is_empty()
}

/// Validates a field that must not be blank.
pub fn validate_required(field: ContactField, value: &str) -> FieldValidationResult {
    if is_required_present(value) {
        FieldValidationResult::valid(field)
    } else {
        FieldValidationResult::invalid(field, FieldError::Required(field.label()))
    }
}

/// Validates the email field against the loose `x@y.z` pattern.
pub fn validate_email(value: &str) -> FieldValidationResult {
    let field = ContactField::Email;
    let value = trim_input(value);

    if value.is_empty() {
        FieldValidationResult::invalid(field, FieldError::Required(field.label()))
    } else if !EMAIL_REGEX.is_match(value) {
        FieldValidationResult::invalid(field, FieldError::InvalidEmail)
    } else {
        FieldValidationResult::valid(field)
    }
}

pub fn validate_field(field: ContactField, value: &str) -> FieldValidationResult {
    match field {
        ContactField::Email => validate_email(value),
        ContactField::Name | ContactField::Subject | ContactField::Message => {
            validate_required(field, value)
        }
    }
}

/// Validates every field, including the ones after the first invalid one.
pub fn validate_all(fields: &FormFields) -> FormValidation {
    FormValidation(ContactField::ALL.map(|field| validate_field(field, fields.get(field))))
}
