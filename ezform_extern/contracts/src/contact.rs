use std::future::Future;

use ezform_models::contact::SubmissionPayload;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Posts the payload as JSON to the contact endpoint.
    ///
    /// Resolves with the response status for every `2xx` response. Anything
    /// else is reported as a [`ContactApiError`].
    fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<ContactApiResponse, ContactApiError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactApiResponse {
    pub status: u16,
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    /// The endpoint answered with a non-success status code.
    #[error("Contact endpoint responded with status {status}.")]
    Status { status: u16, detail: Option<String> },
    /// The request could not be sent or the response could not be read.
    #[error(transparent)]
    Network(#[from] anyhow::Error),
}

impl ContactApiError {
    /// The human readable `detail` message supplied by the endpoint, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Network(_) => None,
        }
    }
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(
        mut self,
        payload: SubmissionPayload,
        result: Result<ContactApiResponse, ContactApiError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_submit_status(self, payload: SubmissionPayload, status: u16) -> Self {
        self.with_submit(payload, Ok(ContactApiResponse { status }))
    }
}
