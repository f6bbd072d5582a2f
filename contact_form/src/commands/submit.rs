use std::fmt::Write;

use anyhow::{bail, Context};
use contact_form_config::Config;
use contact_form_core_contracts::{ContactFormService, ContactFormSubmitError};
use contact_form_core_impl::{ContactFormServiceConfig, ContactFormServiceImpl};
use contact_form_models::{
    field::{ContactField, FormFields},
    submission::StatusKind,
};
use contact_form_view_memory::{FormSnapshot, MemoryFormView};
use tracing::info;

use crate::relay;

pub async fn submit(config: Config, fields: FormFields) -> anyhow::Result<()> {
    let relay = relay::connect(&config.relay)?;

    let view = MemoryFormView::new(fields);
    let service = ContactFormServiceImpl::new(
        view.clone(),
        relay,
        ContactFormServiceConfig {
            service_id: config.relay.service_id,
            template_id: config.relay.template_id,
            status_hide_delay: config.form.status_hide_delay.into(),
            relay_recheck_delay: config.form.relay_recheck_delay.into(),
        },
    );

    run(&service, &view).await
}

/// Submit the form once and print what the user would see afterwards.
pub async fn run(service: &impl ContactFormService, view: &MemoryFormView) -> anyhow::Result<()> {
    service
        .start()
        .await
        .context("The contact form cannot be used")?;

    info!("Submitting contact form");
    let result = service.attempt_submit().await;

    print!("{}", render(&view.snapshot()));

    match result {
        Ok(()) => Ok(()),
        Err(ContactFormSubmitError::Invalid) => bail!("The form contains invalid fields"),
        Err(err) => Err(err.into()),
    }
}

fn render(snapshot: &FormSnapshot) -> String {
    let mut out = String::new();

    for field in ContactField::ALL {
        if let Some(message) = snapshot.visible_error(field) {
            let _ = writeln!(out, "{field}: {message}");
        }
    }

    if let Some((message, kind)) = snapshot.visible_status() {
        let marker = match kind {
            StatusKind::Success => "ok",
            StatusKind::Error => "error",
        };
        let _ = writeln!(out, "[{marker}] {message}");
    }

    out
}
