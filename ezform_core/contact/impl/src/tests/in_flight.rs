use ezform_core_contact_contracts::{ContactFormService, ContactSubmitError};
use ezform_extern_contracts::contact::{
    ContactApiError, ContactApiResponse, MockContactApiService,
};
use ezform_models::{contact::SubmissionStatus, form::FormState};
use ezform_shared_contracts::notification::MockNotificationService;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use super::{make_sut, valid_fields, valid_payload};

type Response = Result<ContactApiResponse, ContactApiError>;

/// Returns a mock whose single `submit` call stays pending until the sender
/// is used.
fn pending_contact_api() -> (MockContactApiService, oneshot::Sender<Response>) {
    let (tx, rx) = oneshot::channel::<Response>();
    let mut contact_api = MockContactApiService::new();
    contact_api
        .expect_submit()
        .once()
        .with(mockall::predicate::eq(valid_payload()))
        .return_once(move |_| {
            Box::pin(async move {
                rx.await
                    .unwrap_or_else(|_| Err(anyhow::anyhow!("sender dropped").into()))
            })
        });
    (contact_api, tx)
}

#[tokio::test]
async fn submit_disabled_while_in_flight() {
    // Arrange
    let (contact_api, tx) = pending_contact_api();
    let notification =
        MockNotificationService::new().with_notify_success("Form Submitted successfully!".into());

    let previous = FormState {
        status: SubmissionStatus::Error,
        ..Default::default()
    };
    let sut = make_sut(contact_api, notification, previous);

    // Act
    let first = sut.submit(valid_fields());
    let observe = async {
        tokio::task::yield_now().await;

        let state = sut.state();
        let view = sut.view();
        let second = sut.submit(valid_fields()).await;

        tx.send(Ok(ContactApiResponse { status: 201 })).unwrap();
        (state, view, second)
    };
    let (result, (during, view, second)) = tokio::join!(first, observe);

    // Assert
    result.unwrap();
    assert!(during.in_flight);
    assert_eq!(during.status, SubmissionStatus::Idle);
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, "Sending...");
    assert_eq!(second, Err(ContactSubmitError::InFlight));

    let after = sut.view();
    assert!(after.submit_enabled);
    assert_eq!(after.submit_label, "Send Message");
}

#[tokio::test]
async fn released_after_failure() {
    // Arrange
    let (contact_api, tx) = pending_contact_api();
    let notification =
        MockNotificationService::new().with_notify_error("Network or server error".into());

    let sut = make_sut(contact_api, notification, FormState::default());

    // Act
    let first = sut.submit(valid_fields());
    let observe = async {
        tokio::task::yield_now().await;
        let in_flight = sut.state().in_flight;
        tx.send(Err(anyhow::anyhow!("timed out").into())).unwrap();
        in_flight
    };
    let (result, in_flight) = tokio::join!(first, observe);

    // Assert
    assert_eq!(
        result,
        Err(ContactSubmitError::Transport {
            message: "Network or server error".into()
        })
    );
    assert!(in_flight);
    assert!(!sut.state().in_flight);
    assert_eq!(sut.state().status, SubmissionStatus::Error);
}

#[tokio::test]
async fn released_when_cancelled() {
    // Arrange
    let (contact_api, _tx) = pending_contact_api();
    let sut = make_sut(contact_api, MockNotificationService::new(), FormState::default());

    // Act
    let mut submit = Box::pin(sut.submit(valid_fields()));
    tokio::select! {
        biased;
        _ = &mut submit => panic!("submission should still be pending"),
        _ = std::future::ready(()) => {}
    }
    let in_flight_before = sut.state().in_flight;
    drop(submit);

    // Assert
    assert!(in_flight_before);
    let state = sut.state();
    assert!(!state.in_flight);
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert!(sut.view().submit_enabled);
}
