use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

use contact_form_core_contracts::{
    ContactFormService, ContactFormStartError, ContactFormSubmitError,
};
use contact_form_models::{
    field::{ContactField, FormFields},
    relay::{RelayServiceId, RelayTemplateId},
    submission::{StatusKind, SubmissionState},
    validation::FieldValidationResult,
};
use contact_form_relay_contracts::{EmailRelayService, RelayEmailRequest};
use contact_form_view_contracts::ContactFormView;
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};

pub mod validator;

#[cfg(test)]
mod tests;

pub const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again.";
pub const UNAVAILABLE_MESSAGE: &str = "Email service unavailable. Please try again later.";

#[derive(Debug)]
pub struct ContactFormServiceImpl<View, Relay> {
    view: Arc<View>,
    relay: Relay,
    config: ContactFormServiceConfig,
    state: Mutex<SubmissionState>,
    in_flight: AtomicBool,
    status_hide: Mutex<Option<AbortHandle>>,
}

#[derive(Debug, Clone)]
pub struct ContactFormServiceConfig {
    pub service_id: RelayServiceId,
    pub template_id: RelayTemplateId,
    /// How long the success message stays visible.
    pub status_hide_delay: Duration,
    /// How long [`ContactFormService::start`] waits before checking the relay
    /// a second time.
    pub relay_recheck_delay: Duration,
}

impl<View, Relay> ContactFormServiceImpl<View, Relay> {
    pub fn new(view: View, relay: Relay, config: ContactFormServiceConfig) -> Self {
        Self {
            view: Arc::new(view),
            relay,
            config,
            state: Mutex::new(SubmissionState::Idle),
            in_flight: AtomicBool::new(false),
            status_hide: Mutex::new(None),
        }
    }
}

impl<View, Relay> ContactFormService for ContactFormServiceImpl<View, Relay>
where
    View: ContactFormView,
    Relay: EmailRelayService,
{
    async fn start(&self) -> Result<(), ContactFormStartError> {
        if !self.view.has_form() {
            error!("Contact form not found");
            return Err(ContactFormStartError::FormMissing);
        }

        if self.relay.status().is_ready() {
            debug!("email relay is available");
            return Ok(());
        }

        warn!(
            delay = ?self.config.relay_recheck_delay,
            "email relay is not available yet, checking again later"
        );
        tokio::time::sleep(self.config.relay_recheck_delay).await;

        if self.relay.status().is_ready() {
            info!("email relay became available on retry");
            Ok(())
        } else {
            error!("email relay could not be loaded");
            Err(ContactFormStartError::RelayUnavailable)
        }
    }

    async fn attempt_submit(&self) -> Result<(), ContactFormSubmitError> {
        let Some(_in_flight) = InFlight::claim(&self.in_flight) else {
            debug!("a submission is already pending, ignoring");
            return Err(ContactFormSubmitError::Busy);
        };

        debug!("processing form submission");

        self.cancel_status_hide();
        self.reset_errors();
        self.view.hide_status();
        self.set_state(SubmissionState::Idle);

        let fields = FormFields::read_with(|field| self.view.field_value(field)).trimmed();

        let validation = validator::validate_all(&fields);
        validation.results().for_each(|result| self.annotate(result));
        if !validation.is_valid() {
            debug!(
                invalid = ?validation.errors().map(|x| x.field).collect::<Vec<_>>(),
                "validation failed, not sending"
            );
            return Err(ContactFormSubmitError::Invalid);
        }

        let _pending = PendingSubmit::begin(&*self.view, &self.state);

        if !self.relay.status().is_ready() {
            warn!("email relay is not available, not sending");
            self.set_state(SubmissionState::Failed);
            self.view.show_status(UNAVAILABLE_MESSAGE, StatusKind::Error);
            return Err(ContactFormSubmitError::Unavailable);
        }

        let request = RelayEmailRequest {
            service_id: self.config.service_id.clone(),
            template_id: self.config.template_id.clone(),
            template_params: fields.into(),
        };

        self.set_state(SubmissionState::Sending);
        match self.relay.send(request).await {
            Ok(response) => {
                info!(status = response.status, "message sent");
                self.set_state(SubmissionState::Succeeded);
                self.view.show_status(SUCCESS_MESSAGE, StatusKind::Success);
                self.view.clear_fields();
                self.schedule_status_hide();
                Ok(())
            }
            Err(err) => {
                error!("failed to send message: {err:#}");
                self.set_state(SubmissionState::Failed);
                self.view.show_status(FAILURE_MESSAGE, StatusKind::Error);
                Err(ContactFormSubmitError::Send(err))
            }
        }
    }

    fn validate_field(&self, field: ContactField) -> bool {
        let result = validator::validate_field(field, &self.view.field_value(field));
        self.annotate(&result);
        result.is_valid()
    }

    fn reset_errors(&self) {
        for field in ContactField::ALL {
            self.view.hide_field_error(field);
        }
    }

    fn state(&self) -> SubmissionState {
        *lock(&self.state)
    }
}

impl<View, Relay> ContactFormServiceImpl<View, Relay>
where
    View: ContactFormView,
{
    fn annotate(&self, result: &FieldValidationResult) {
        match result.error {
            Some(err) => self.view.show_field_error(result.field, &err.to_string()),
            None => self.view.hide_field_error(result.field),
        }
    }

    fn set_state(&self, state: SubmissionState) {
        *lock(&self.state) = state;
    }

    fn schedule_status_hide(&self) {
        let view = Arc::clone(&self.view);
        let delay = self.config.status_hide_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            view.hide_status();
        });
        *lock(&self.status_hide) = Some(task.abort_handle());
    }

    /// A newer submission owns the status message, so an older timer must not
    /// hide it.
    fn cancel_status_hide(&self) {
        if let Some(task) = lock(&self.status_hide).take() {
            task.abort();
        }
    }
}

/// Disables the submit button for as long as it is alive and restores it on
/// drop, whichever way the submission ends.
struct PendingSubmit<'a, View: ContactFormView> {
    view: &'a View,
    state: &'a Mutex<SubmissionState>,
    original_label: String,
}

impl<'a, View: ContactFormView> PendingSubmit<'a, View> {
    fn begin(view: &'a View, state: &'a Mutex<SubmissionState>) -> Self {
        let original_label = view.submit_label();
        view.set_submit_label(PENDING_LABEL);
        view.set_submit_enabled(false);
        Self {
            view,
            state,
            original_label,
        }
    }
}

impl<View: ContactFormView> Drop for PendingSubmit<'_, View> {
    fn drop(&mut self) {
        self.view.set_submit_label(&self.original_label);
        self.view.set_submit_enabled(true);

        let mut state = lock(self.state);
        if state.is_sending() {
            warn!("submission was abandoned while sending");
            *state = SubmissionState::Idle;
        }
    }
}

/// Held for the whole duration of [`ContactFormService::attempt_submit`].
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
