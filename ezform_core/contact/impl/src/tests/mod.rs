use std::sync::{Arc, Mutex};

use ezform_extern_contracts::contact::MockContactApiService;
use ezform_models::{
    contact::{FormFields, SubmissionPayload},
    form::FormState,
};
use ezform_shared_contracts::notification::MockNotificationService;

use crate::ContactFormServiceImpl;

mod in_flight;

type Sut = ContactFormServiceImpl<MockContactApiService, MockNotificationService>;

fn make_sut(
    contact_api: MockContactApiService,
    notification: MockNotificationService,
    state: FormState,
) -> Sut {
    ContactFormServiceImpl {
        contact_api,
        notification,
        state: Arc::new(Mutex::new(state)),
    }
}

fn valid_fields() -> FormFields {
    FormFields {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        phone: "9876543210".into(),
        message: "hi".into(),
    }
}

fn valid_payload() -> SubmissionPayload {
    SubmissionPayload {
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
        phone: "9876543210".into(),
        message: "hi".into(),
    }
}
