use std::time::Duration;

use contact_form_models::{
    field::FormFields,
    relay::{RelayServiceId, RelayTemplateId, TemplateParams},
};
use contact_form_relay_contracts::{MockEmailRelayService, RelayEmailRequest, RelayResponse};
use contact_form_view_memory::MemoryFormView;

use crate::{ContactFormServiceConfig, ContactFormServiceImpl};


type Sut = ContactFormServiceImpl<MemoryFormView, MockEmailRelayService>;

fn make_sut(view: &MemoryFormView, relay: MockEmailRelayService) -> Sut {
    ContactFormServiceImpl::new(view.clone(), relay, make_config())
}

fn make_config() -> ContactFormServiceConfig {
    ContactFormServiceConfig {
        service_id: RelayServiceId::try_new("service_9x3x5df").unwrap(),
        template_id: RelayTemplateId::try_new("template_a1ethkb").unwrap(),
        status_hide_delay: Duration::from_secs(6),
        relay_recheck_delay: Duration::from_secs(1),
    }
}

fn filled_fields() -> FormFields {
    FormFields {
        name: " Max Mustermann ".into(),
        email: "max.mustermann@example.de\n".into(),
        subject: "Test".into(),
        message: "  Hello World!".into(),
    }
}

fn expected_request() -> RelayEmailRequest {
    RelayEmailRequest {
        service_id: RelayServiceId::try_new("service_9x3x5df").unwrap(),
        template_id: RelayTemplateId::try_new("template_a1ethkb").unwrap(),
        template_params: TemplateParams {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            subject: "Test".into(),
            message: "Hello World!".into(),
        },
    }
}

fn ok_response() -> RelayResponse {
    RelayResponse {
        status: 200,
        text: "OK".into(),
    }
}
