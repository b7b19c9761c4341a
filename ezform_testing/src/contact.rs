use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Context;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use ezform_models::contact::SubmissionPayload;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

pub const CONTACT_ROUTE: &str = "/api/contact-us/";

/// Name that makes the server fail with a bare `500`.
pub const EXPLODE_NAME: &str = "explode";
/// Name that makes the server answer `422` with a structured `detail`.
pub const VALIDATION_NAME: &str = "validation";
/// Email domain that is answered with `202 Accepted` instead of `201`.
pub const ACCEPTED_DOMAIN: &str = "accepted.test";
pub const INVALID_REGION_DETAIL: &str = "Invalid phone region";

pub fn router() -> Router {
    Router::new().route(CONTACT_ROUTE, routing::post(contact_us))
}

pub async fn start_server(host: IpAddr, port: u16) -> anyhow::Result<()> {
    info!("Starting contact endpoint testing server on {host}:{port}");
    info!("Contact endpoint: http://{host}:{port}{CONTACT_ROUTE}");
    info!(
        "Submissions are answered with 201, except: emails at {ACCEPTED_DOMAIN:?} get 202, \
         phone numbers starting with 0 get 400 with a detail message, the name \
         {EXPLODE_NAME:?} gets 500 and the name {VALIDATION_NAME:?} gets 422"
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router())
        .await
        .context("Failed to start HTTP server")
}

/// Starts the server on an ephemeral localhost port in the background and
/// returns the address it listens on.
pub async fn spawn_server() -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to an ephemeral port")?;
    let addr = listener
        .local_addr()
        .context("Failed to get local address")?;

    tokio::spawn(async move { axum::serve(listener, router()).await });

    Ok(addr)
}

async fn contact_us(Json(payload): Json<SubmissionPayload>) -> Response {
    info!(?payload, "Received contact form submission");

    if payload.name == EXPLODE_NAME {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    if payload.name == VALIDATION_NAME {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "loc": ["body", "name"], "msg": "rejected" }] })),
        )
            .into_response();
    }

    if payload.phone.starts_with('0') {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": INVALID_REGION_DETAIL })),
        )
            .into_response();
    }

    let status = match payload.email.rsplit_once('@') {
        Some((_, domain)) if domain.eq_ignore_ascii_case(ACCEPTED_DOMAIN) => StatusCode::ACCEPTED,
        _ => StatusCode::CREATED,
    };

    (status, Json(payload)).into_response()
}
