use std::sync::Arc;

use anyhow::{anyhow, Context};
use contact_form_models::relay::{
    RelayPublicKey, RelayServiceId, RelayTemplateId, TemplateParams,
};
use contact_form_relay_contracts::{
    EmailRelayService, RelayEmailRequest, RelayResponse, RelayStatus,
};
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

pub use crate::http::HttpClient;

mod http;

pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Client of the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsRelayServiceImpl {
    config: EmailJsRelayServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailJsRelayServiceConfig {
    send_endpoint: Arc<Url>,
    public_key: Option<RelayPublicKey>,
    private_key: Option<Arc<str>>,
}

impl EmailJsRelayServiceConfig {
    /// Without a `public_key` the relay stays [`RelayStatus::NotReady`].
    pub fn new(
        send_endpoint_override: Option<Url>,
        public_key: Option<RelayPublicKey>,
        private_key: Option<String>,
    ) -> Self {
        Self {
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            public_key,
            private_key: private_key.map(Into::into),
        }
    }
}

impl EmailJsRelayServiceImpl {
    pub fn new(config: EmailJsRelayServiceConfig) -> anyhow::Result<Self> {
        let client = HttpClient::new().context("Failed to build http client")?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: EmailJsRelayServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

impl EmailRelayService for EmailJsRelayServiceImpl {
    fn status(&self) -> RelayStatus {
        match self.config.public_key {
            Some(_) => RelayStatus::Ready,
            None => RelayStatus::NotReady,
        }
    }

    async fn send(&self, request: RelayEmailRequest) -> anyhow::Result<RelayResponse> {
        let public_key = self
            .config
            .public_key
            .as_ref()
            .ok_or_else(|| anyhow!("Email relay has not been initialized"))?;

        let RelayEmailRequest {
            service_id,
            template_id,
            template_params,
        } = &request;

        debug!(
            endpoint = %self.config.send_endpoint,
            service_id = service_id.as_str(),
            template_id = template_id.as_str(),
            "send email via relay"
        );

        let response = self
            .client
            .post((*self.config.send_endpoint).clone())
            .json(&SendRequest {
                service_id,
                template_id,
                user_id: public_key,
                access_token: self.config.private_key.as_deref(),
                template_params,
            })
            .send()
            .await
            .context("Failed to reach email relay")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read email relay response")?;
        trace!(%status, text = text.as_str(), "relay responded");

        if !status.is_success() {
            return Err(anyhow!("Email relay rejected the request ({status}): {text}"));
        }

        Ok(RelayResponse {
            status: status.as_u16(),
            text,
        })
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a RelayServiceId,
    template_id: &'a RelayTemplateId,
    user_id: &'a RelayPublicKey,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a TemplateParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status() {
        let ready = EmailJsRelayServiceConfig::new(
            None,
            Some(RelayPublicKey::try_new("public-key").unwrap()),
            None,
        );
        let not_ready = EmailJsRelayServiceConfig::new(None, None, None);

        let client = HttpClient::new().unwrap();
        assert_eq!(
            EmailJsRelayServiceImpl::with_client(ready, client.clone()).status(),
            RelayStatus::Ready
        );
        assert_eq!(
            EmailJsRelayServiceImpl::with_client(not_ready, client).status(),
            RelayStatus::NotReady
        );
    }

    #[test]
    fn default_endpoint() {
        let config = EmailJsRelayServiceConfig::new(None, None, None);
        assert_eq!(config.send_endpoint.as_str(), SEND_ENDPOINT);
    }

    #[test]
    fn request_body() {
        let service_id = RelayServiceId::try_new("service_9x3x5df").unwrap();
        let template_id = RelayTemplateId::try_new("template_a1ethkb").unwrap();
        let public_key = RelayPublicKey::try_new("public-key").unwrap();
        let template_params = TemplateParams {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            subject: "Test".into(),
            message: "Hello World!".into(),
        };

        let body = serde_json::to_value(SendRequest {
            service_id: &service_id,
            template_id: &template_id,
            user_id: &public_key,
            access_token: None,
            template_params: &template_params,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_9x3x5df",
                "template_id": "template_a1ethkb",
                "user_id": "public-key",
                "template_params": {
                    "name": "Max Mustermann",
                    "email": "max.mustermann@example.de",
                    "subject": "Test",
                    "message": "Hello World!",
                },
            })
        );
    }
}
