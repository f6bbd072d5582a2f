use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Id of the input element holding the value of this field.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Id of the element displaying the validation error of this field.
    pub fn error_element_id(self) -> &'static str {
        match self {
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Subject => "subject-error",
            Self::Message => "message-error",
        }
    }

    /// Human readable label, used in "`<label>` is required".
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Snapshot of the current values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    /// Builds a snapshot by reading every field through `read`.
    pub fn read_with(mut read: impl FnMut(ContactField) -> String) -> Self {
        Self {
            name: read(ContactField::Name),
            email: read(ContactField::Email),
            subject: read(ContactField::Subject),
            message: read(ContactField::Message),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Returns a copy with surrounding whitespace removed from every value.
    pub fn trimmed(&self) -> Self {
        Self::read_with(|field| trim_input(self.get(field)).to_owned())
    }
}

/// Strips surrounding whitespace from a form value. Unlike [`str::trim`] this
/// also strips the byte order mark, which browsers treat as whitespace.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed() {
        let fields = FormFields {
            name: "  Max Mustermann ".into(),
            email: "\tmax@example.de\n".into(),
            subject: "Hello".into(),
            message: " \n ".into(),
        };

        assert_eq!(
            fields.trimmed(),
            FormFields {
                name: "Max Mustermann".into(),
                email: "max@example.de".into(),
                subject: "Hello".into(),
                message: "".into(),
            }
        );
    }

    #[test]
    fn trim_input_strips_byte_order_mark() {
        assert_eq!(trim_input("\u{FEFF}"), "");
        assert_eq!(trim_input(" \u{FEFF}Max\u{a0}\n"), "Max");
        assert_eq!(trim_input("Max \u{FEFF} Mustermann"), "Max \u{FEFF} Mustermann");
    }

    #[test]
    fn element_ids() {
        for field in ContactField::ALL {
            assert_eq!(
                field.error_element_id(),
                format!("{}-error", field.element_id())
            );
        }
    }
}
