use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use contact_form_models::{
    field::{ContactField, FormFields},
    submission::StatusKind,
};
use contact_form_view_contracts::ContactFormView;
use tracing::trace;

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// A contact form held in memory. Clones share the same state, so a caller can
/// keep a handle to inspect what the controller rendered.
#[derive(Debug, Clone)]
pub struct MemoryFormView {
    attached: bool,
    state: Arc<Mutex<FormSnapshot>>,
}

/// Everything a user would currently see on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub errors: HashMap<ContactField, FieldErrorSnapshot>,
    pub status: StatusSnapshot,
    pub submit_label: String,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorSnapshot {
    pub message: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub message: String,
    pub kind: Option<StatusKind>,
    pub visible: bool,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            fields: FormFields::default(),
            errors: HashMap::new(),
            status: StatusSnapshot {
                message: String::new(),
                kind: None,
                visible: false,
            },
            submit_label: DEFAULT_SUBMIT_LABEL.into(),
            submit_enabled: true,
        }
    }
}

impl FormSnapshot {
    /// Returns the message of the field's error if it is currently visible.
    pub fn visible_error(&self, field: ContactField) -> Option<&str> {
        self.errors
            .get(&field)
            .filter(|x| x.visible)
            .map(|x| x.message.as_str())
    }

    /// Returns the status message if it is currently visible.
    pub fn visible_status(&self) -> Option<(&str, StatusKind)> {
        self.status
            .kind
            .filter(|_| self.status.visible)
            .map(|kind| (self.status.message.as_str(), kind))
    }
}

impl MemoryFormView {
    pub fn new(fields: FormFields) -> Self {
        Self {
            attached: true,
            state: Arc::new(Mutex::new(FormSnapshot {
                fields,
                ..Default::default()
            })),
        }
    }

    /// A view whose form root is missing.
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::new(FormFields::default())
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.lock().clone()
    }

    /// Replaces the value of a field, as if the user typed into it.
    pub fn set_field_value(&self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.lock();
        let slot = match field {
            ContactField::Name => &mut state.fields.name,
            ContactField::Email => &mut state.fields.email,
            ContactField::Subject => &mut state.fields.subject,
            ContactField::Message => &mut state.fields.message,
        };
        *slot = value;
    }

    fn lock(&self) -> MutexGuard<'_, FormSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryFormView {
    fn default() -> Self {
        Self::new(FormFields::default())
    }
}

impl ContactFormView for MemoryFormView {
    fn has_form(&self) -> bool {
        self.attached
    }

    fn field_value(&self, field: ContactField) -> String {
        self.lock().fields.get(field).to_owned()
    }

    fn clear_fields(&self) {
        trace!("clear fields");
        self.lock().fields = FormFields::default();
    }

    fn show_field_error(&self, field: ContactField, message: &str) {
        trace!(%field, text = message, "show field error");
        self.lock().errors.insert(
            field,
            FieldErrorSnapshot {
                message: message.into(),
                visible: true,
            },
        );
    }

    fn hide_field_error(&self, field: ContactField) {
        if let Some(error) = self.lock().errors.get_mut(&field) {
            error.visible = false;
        }
    }

    fn show_status(&self, message: &str, kind: StatusKind) {
        trace!(text = message, ?kind, "show status");
        self.lock().status = StatusSnapshot {
            message: message.into(),
            kind: Some(kind),
            visible: true,
        };
    }

    fn hide_status(&self) {
        self.lock().status.visible = false;
    }

    fn submit_label(&self) -> String {
        self.lock().submit_label.clone()
    }

    fn set_submit_label(&self, label: &str) {
        self.lock().submit_label = label.into();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.lock().submit_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clones_share_state() {
        let view = MemoryFormView::default();
        let handle = view.clone();

        view.set_field_value(ContactField::Subject, "Hello");
        view.show_field_error(ContactField::Email, "Email is required");
        view.set_submit_enabled(false);

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.fields.subject, "Hello");
        assert_eq!(
            snapshot.visible_error(ContactField::Email),
            Some("Email is required")
        );
        assert!(!snapshot.submit_enabled);
    }

    #[test]
    fn hide_field_error_keeps_message() {
        let view = MemoryFormView::default();
        view.show_field_error(ContactField::Name, "Name is required");
        view.hide_field_error(ContactField::Name);
        view.hide_field_error(ContactField::Message);

        let snapshot = view.snapshot();
        assert_eq!(snapshot.visible_error(ContactField::Name), None);
        assert_eq!(
            snapshot.errors.get(&ContactField::Name),
            Some(&FieldErrorSnapshot {
                message: "Name is required".into(),
                visible: false,
            })
        );
        assert!(!snapshot.errors.contains_key(&ContactField::Message));
    }

    #[test]
    fn status() {
        let view = MemoryFormView::default();
        assert_eq!(view.snapshot().visible_status(), None);

        view.show_status("Sent", StatusKind::Success);
        assert_eq!(
            view.snapshot().visible_status(),
            Some(("Sent", StatusKind::Success))
        );

        view.hide_status();
        assert_eq!(view.snapshot().visible_status(), None);
        assert_eq!(view.snapshot().status.message, "Sent");
    }

    #[test]
    fn clear_fields() {
        let view = MemoryFormView::new(FormFields {
            name: "Max".into(),
            email: "max@example.de".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        });

        view.clear_fields();

        assert_eq!(view.snapshot().fields, FormFields::default());
        assert_eq!(view.field_value(ContactField::Email), "");
    }

    #[test]
    fn detached() {
        assert!(!MemoryFormView::detached().has_form());
        assert!(MemoryFormView::default().has_form());
    }
}
