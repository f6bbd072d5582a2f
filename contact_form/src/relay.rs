use anyhow::Context;
use contact_form_config::RelayConfig;
use contact_form_relay_emailjs::{EmailJsRelayServiceConfig, EmailJsRelayServiceImpl};

/// Set up the client of the hosted email relay
pub fn connect(config: &RelayConfig) -> anyhow::Result<EmailJsRelayServiceImpl> {
    EmailJsRelayServiceImpl::new(EmailJsRelayServiceConfig::new(
        config.endpoint_override.clone(),
        config.public_key.clone(),
        config.private_key.clone(),
    ))
    .context("Failed to set up email relay client")
}
