use std::{collections::BTreeMap, net::SocketAddr};

use contact_form_models::relay::{
    RelayPublicKey, RelayServiceId, RelayTemplateId, TemplateParams,
};
use contact_form_relay_contracts::{EmailRelayService, RelayEmailRequest, RelayResponse};
use contact_form_relay_emailjs::{EmailJsRelayServiceConfig, EmailJsRelayServiceImpl};
use contact_form_testing::relay::{self, ReceivedEmail, SEND_ROUTE};

const PUBLIC_KEY: &str = "test-public-key";

#[tokio::test]
async fn send_email() {
    let (addr, outbox) = relay::spawn(PUBLIC_KEY).await.unwrap();
    let sut = make_sut(addr, PUBLIC_KEY, Some("private-key"));

    let result = sut.send(make_request()).await.unwrap();

    assert_eq!(
        result,
        RelayResponse {
            status: 200,
            text: "OK".into()
        }
    );
    assert_eq!(
        outbox.emails(),
        [ReceivedEmail {
            service_id: "service_9x3x5df".into(),
            template_id: "template_a1ethkb".into(),
            access_token: Some("private-key".into()),
            template_params: BTreeMap::from([
                ("name".into(), "Max Mustermann".into()),
                ("email".into(), "max.mustermann@example.de".into()),
                ("subject".into(), "Test".into()),
                ("message".into(), "Hello World!".into()),
            ]),
        }]
    );
}

#[tokio::test]
async fn invalid_public_key() {
    let (addr, outbox) = relay::spawn(PUBLIC_KEY).await.unwrap();
    let sut = make_sut(addr, "wrong-key", None);

    let err = sut.send(make_request()).await.unwrap_err();

    assert!(err.to_string().contains("400"), "{err}");
    assert!(outbox.emails().is_empty());
}

#[tokio::test]
async fn not_initialized() {
    let (addr, outbox) = relay::spawn(PUBLIC_KEY).await.unwrap();
    let sut = EmailJsRelayServiceImpl::new(EmailJsRelayServiceConfig::new(
        Some(endpoint(addr)),
        None,
        None,
    ))
    .unwrap();

    let err = sut.send(make_request()).await.unwrap_err();

    assert_eq!(err.to_string(), "Email relay has not been initialized");
    assert!(outbox.emails().is_empty());
}

#[tokio::test]
async fn unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sut = make_sut(addr, PUBLIC_KEY, None);

    let err = sut.send(make_request()).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to reach email relay");
}

fn make_sut(addr: SocketAddr, public_key: &str, private_key: Option<&str>) -> EmailJsRelayServiceImpl {
    EmailJsRelayServiceImpl::new(EmailJsRelayServiceConfig::new(
        Some(endpoint(addr)),
        Some(RelayPublicKey::try_new(public_key).unwrap()),
        private_key.map(Into::into),
    ))
    .unwrap()
}

fn endpoint(addr: SocketAddr) -> url::Url {
    format!("http://{addr}{SEND_ROUTE}").parse().unwrap()
}

fn make_request() -> RelayEmailRequest {
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
