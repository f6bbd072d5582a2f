use contact_form_models::{field::ContactField, submission::StatusKind};

/// The parts of the rendered contact form the controller reads and updates.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormView: Send + Sync + 'static {
    /// Returns whether the form root is present.
    fn has_form(&self) -> bool;

    /// Returns the raw (untrimmed) value of the given field.
    fn field_value(&self, field: ContactField) -> String;

    /// Resets every field to an empty value.
    fn clear_fields(&self);

    /// Displays `message` next to the field and marks it as invalid.
    fn show_field_error(&self, field: ContactField, message: &str);

    /// Hides the error of the field and removes its invalid marker.
    fn hide_field_error(&self, field: ContactField);

    fn show_status(&self, message: &str, kind: StatusKind);

    fn hide_status(&self);

    fn submit_label(&self) -> String;

    fn set_submit_label(&self, label: &str);

    fn set_submit_enabled(&self, enabled: bool);
}

#[cfg(feature = "mock")]
impl MockContactFormView {
    pub fn with_field_values(mut self, values: [(ContactField, &'static str); 4]) -> Self {
        self.expect_field_value().returning(move |field| {
            values
                .iter()
                .find(|(x, _)| *x == field)
                .map(|(_, value)| (*value).to_owned())
                .unwrap_or_default()
        });
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.expect_hide_field_error()
            .times(ContactField::ALL.len()..)
            .return_const(());
        self.expect_hide_status().return_const(());
        self
    }
}
