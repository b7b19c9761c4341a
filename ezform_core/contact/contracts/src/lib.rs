use std::future::Future;

use ezform_models::{
    contact::FormFields,
    form::{FormState, FormView},
    validation::FieldErrors,
};
use thiserror::Error;

/// One contact form instance: validates, submits and remembers the outcome of
/// the last attempt.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Runs one submission attempt with the given field values.
    ///
    /// Returns `Ok(())` only if the endpoint accepted the submission. Every
    /// outcome is also reflected in [`state`](Self::state).
    fn submit(
        &self,
        fields: FormFields,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;

    /// Returns a snapshot of the current form state.
    fn state(&self) -> FormState;

    /// Returns the display projection of the current form state.
    fn view(&self) -> FormView {
        self.state().view()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactSubmitError {
    #[error("The form contains invalid fields: {0}")]
    Invalid(FieldErrors),
    #[error("A submission of this form is already in flight.")]
    InFlight,
    #[error("The contact endpoint rejected the submission with status {status}.")]
    Rejected { status: u16 },
    #[error("Failed to reach the contact endpoint: {message}")]
    Transport { message: String },
}
