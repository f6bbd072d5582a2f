use std::future::Future;

use contact_form_models::{field::ContactField, submission::SubmissionState};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Makes sure the form and the email relay are usable, rechecking the
    /// relay once after a short delay if it is not ready yet.
    fn start(&self) -> impl Future<Output = Result<(), ContactFormStartError>> + Send;

    /// Validates the whole form and, if it is valid, sends it via the email
    /// relay. The outcome is reflected on the form. Rejected with
    /// [`ContactFormSubmitError::Busy`] while another submission is pending,
    /// leaving the form untouched.
    fn attempt_submit(&self) -> impl Future<Output = Result<(), ContactFormSubmitError>> + Send;

    /// Validates a single field (e.g. after the user typed into it) and shows
    /// or hides its error.
    fn validate_field(&self, field: ContactField) -> bool;

    /// Hides the errors of all fields.
    fn reset_errors(&self);

    /// Returns the state of the last submission attempt.
    fn state(&self) -> SubmissionState;
}

#[derive(Debug, Error)]
pub enum ContactFormStartError {
    #[error("The contact form could not be found.")]
    FormMissing,
    #[error("The email relay could not be loaded.")]
    RelayUnavailable,
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("A submission is already in progress.")]
    Busy,
    #[error("The form contains invalid fields.")]
    Invalid,
    #[error("The email relay is unavailable.")]
    Unavailable,
    #[error("Failed to send message.")]
    Send(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFormService {
    pub fn with_start(mut self, result: Result<(), ContactFormStartError>) -> Self {
        self.expect_start()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_attempt_submit(mut self, result: Result<(), ContactFormSubmitError>) -> Self {
        self.expect_attempt_submit()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
