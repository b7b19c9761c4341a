use std::sync::Arc;

use anyhow::Context;
use ezform_extern_contracts::contact::{ContactApiError, ContactApiResponse, ContactApiService};
use ezform_models::contact::SubmissionPayload;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

const CONTACT_ENDPOINT: &str = "https://vernanbackend.ezlab.in/api/contact-us/";

#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    config: ContactApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    endpoint: Arc<Url>,
}

impl ContactApiServiceConfig {
    pub fn new(endpoint_override: Option<Url>) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| CONTACT_ENDPOINT.parse().unwrap())
                .into(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<ContactApiResponse, ContactApiError> {
        debug!(endpoint = %self.config.endpoint, "Posting contact form submission");

        let response = self
            .http
            .post((*self.config.endpoint).clone())
            .json(payload)
            .send()
            .await
            .context("Failed to send contact request")?;

        let status = response.status();
        if status.is_success() {
            return Ok(ContactApiResponse {
                status: status.as_u16(),
            });
        }

        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .filter(|detail| !detail.is_empty());

        Err(ContactApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Error body of the endpoint. A `detail` that is not a string (e.g. a list
/// of validation errors) makes deserialization fail and is treated as absent.
#[derive(Deserialize)]
struct ErrorResponse {
    detail: Option<String>,
}
