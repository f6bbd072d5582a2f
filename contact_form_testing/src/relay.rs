use std::{
    collections::BTreeMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub const SEND_ROUTE: &str = "/api/v1.0/email/send";

/// Emails accepted by the fake relay, in the order they were received.
#[derive(Debug, Clone, Default)]
pub struct Outbox(Arc<Mutex<Vec<ReceivedEmail>>>);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReceivedEmail {
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    pub template_params: BTreeMap<String, String>,
}

impl Outbox {
    pub fn emails(&self) -> Vec<ReceivedEmail> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, email: ReceivedEmail) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(email);
    }
}

#[derive(Debug, Clone)]
struct RelayState {
    public_key: Arc<str>,
    outbox: Outbox,
}

pub fn router(public_key: &str, outbox: Outbox) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(RelayState {
            public_key: public_key.into(),
            outbox,
        })
}

pub async fn start_server(host: IpAddr, port: u16, public_key: String) -> anyhow::Result<()> {
    info!("Starting email relay testing server on {host}:{port}");
    info!("Send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Public key: {public_key:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(&public_key, Outbox::default()))
        .await
        .context("Failed to start HTTP server")
}

/// Starts the fake relay on a random local port in the background.
pub async fn spawn(public_key: &str) -> anyhow::Result<(SocketAddr, Outbox)> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to a local port")?;
    let addr = listener.local_addr()?;

    let outbox = Outbox::default();
    let router = router(public_key, outbox.clone());
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            warn!("email relay testing server stopped: {err}");
        }
    });

    Ok((addr, outbox))
}

#[derive(Deserialize)]
struct SendRequest {
    user_id: String,
    #[serde(flatten)]
    email: ReceivedEmail,
}

async fn send(
    State(state): State<RelayState>,
    Json(SendRequest { user_id, email }): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    if user_id != *state.public_key {
        return (
            StatusCode::BAD_REQUEST,
            "The Public Key is invalid. To find this ID, visit your account page.",
        );
    }
    if email.service_id.is_empty() || email.template_id.is_empty() {
        return (StatusCode::BAD_REQUEST, "The service ID or template ID is invalid.");
    }

    info!(
        service_id = email.service_id.as_str(),
        template_id = email.template_id.as_str(),
        "accepted email"
    );
    state.outbox.push(email);

    (StatusCode::OK, "OK")
}
