use std::future::Future;

use contact_form_models::relay::{RelayServiceId, RelayTemplateId, TemplateParams};

/// A hosted service that turns template parameters into an email.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailRelayService: Send + Sync + 'static {
    /// Returns whether the relay has been initialized and can accept requests.
    fn status(&self) -> RelayStatus;

    /// Asks the relay to render the template and deliver the email.
    fn send(
        &self,
        request: RelayEmailRequest,
    ) -> impl Future<Output = anyhow::Result<RelayResponse>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayStatus {
    Ready,
    NotReady,
}

impl RelayStatus {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayEmailRequest {
    pub service_id: RelayServiceId,
    pub template_id: RelayTemplateId,
    pub template_params: TemplateParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

#[cfg(feature = "mock")]
impl MockEmailRelayService {
    pub fn with_status(mut self, status: RelayStatus) -> Self {
        self.expect_status().return_const(status);
        self
    }

    pub fn with_send(mut self, request: RelayEmailRequest, result: Result<(), String>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| {
                let result = result
                    .map(|()| RelayResponse {
                        status: 200,
                        text: "OK".into(),
                    })
                    .map_err(anyhow::Error::msg);
                Box::pin(std::future::ready(result))
            });
        self
    }
}
