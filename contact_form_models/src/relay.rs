use nutype::nutype;
use serde::Serialize;

use crate::field::FormFields;

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct RelayServiceId(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct RelayTemplateId(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct RelayPublicKey(String);

impl std::fmt::Debug for RelayPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[sensitive]")
    }
}

/// Flat parameter set handed to the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<FormFields> for TemplateParams {
    fn from(value: FormFields) -> Self {
        let FormFields {
            name,
            email,
            subject,
            message,
        } = value.trimmed();
        Self {
            name,
            email,
            subject,
            message,
        }
    }
}
