use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ezform_core_contact_contracts::{ContactFormService, ContactSubmitError};
use ezform_extern_contracts::contact::{ContactApiError, ContactApiService};
use ezform_models::{
    contact::{FormFields, SubmissionStatus},
    form::FormState,
    validation::{self, FieldErrors},
};
use ezform_shared_contracts::notification::NotificationService;
use tracing::{debug, info, warn};

#[cfg(test)]
mod tests;

pub const SUCCESS_NOTIFICATION: &str = "Form Submitted successfully!";
pub const REJECTED_NOTIFICATION: &str = "Error submitting form";
pub const TRANSPORT_FALLBACK_NOTIFICATION: &str = "Network or server error";

/// Clones share the form state and therefore act as the same form instance.
#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<ContactApi, Notification> {
    contact_api: ContactApi,
    notification: Notification,
    state: Arc<Mutex<FormState>>,
}

impl<ContactApi, Notification> ContactFormServiceImpl<ContactApi, Notification> {
    /// Creates a new form instance with empty fields and an idle status.
    pub fn new(contact_api: ContactApi, notification: Notification) -> Self {
        Self {
            contact_api,
            notification,
            state: Default::default(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }
}

impl<ContactApi, Notification> ContactFormService
    for ContactFormServiceImpl<ContactApi, Notification>
where
    ContactApi: ContactApiService,
    Notification: NotificationService,
{
    #[tracing::instrument(skip_all)]
    async fn submit(&self, fields: FormFields) -> Result<(), ContactSubmitError> {
        let (payload, in_flight) = {
            let mut state = self.lock();
            if state.in_flight {
                debug!("Submit ignored while another submission is in flight");
                return Err(ContactSubmitError::InFlight);
            }

            state.fields = fields;
            match validation::validate(&state.fields) {
                Ok(payload) => {
                    state.errors = FieldErrors::default();
                    state.status = SubmissionStatus::Idle;
                    state.in_flight = true;
                    (payload, InFlightGuard(&self.state))
                }
                Err(errors) => {
                    debug!(%errors, "Contact form validation failed");
                    state.errors = errors.clone();
                    return Err(ContactSubmitError::Invalid(errors));
                }
            }
        };

        let outcome = match self.contact_api.submit(&payload).await {
            Ok(response) if matches!(response.status, 200 | 201) => {
                info!(status = response.status, "Contact form submission accepted");
                Ok(())
            }
            Ok(response) => {
                warn!(status = response.status, "Contact form submission rejected");
                Err(ContactSubmitError::Rejected {
                    status: response.status,
                })
            }
            Err(err) => {
                warn!(error = %err, "Contact form submission failed");
                Err(ContactSubmitError::Transport {
                    message: transport_message(&err),
                })
            }
        };

        {
            let mut state = self.lock();
            match outcome {
                Ok(()) => {
                    state.status = SubmissionStatus::Success;
                    state.fields = FormFields::submitted();
                }
                Err(_) => state.status = SubmissionStatus::Error,
            }
        }
        drop(in_flight);

        match &outcome {
            Ok(()) => self.notification.notify_success(SUCCESS_NOTIFICATION),
            Err(ContactSubmitError::Transport { message }) => {
                self.notification.notify_error(message)
            }
            Err(_) => self.notification.notify_error(REJECTED_NOTIFICATION),
        }

        outcome
    }

    fn state(&self) -> FormState {
        self.lock().clone()
    }
}

fn transport_message(err: &ContactApiError) -> String {
    err.detail()
        .unwrap_or(TRANSPORT_FALLBACK_NOTIFICATION)
        .to_owned()
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the in-flight flag when dropped, so the form becomes submittable
/// again even if the submitting future is cancelled or panics.
struct InFlightGuard<'a>(&'a Mutex<FormState>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        lock(self.0).in_flight = false;
    }
}
