use std::io::Write;

use clap::Args;
use ezform_config::Config;
use ezform_core_contact_contracts::ContactFormService;
use ezform_models::contact::FormFields;
use ezform_shared_impl::notification::NotificationReceiver;

use crate::{
    environment::Environment,
    render::{drain_notifications, render_form},
};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name of the visitor
    #[arg(long, default_value = "")]
    name: String,
    /// Email address of the visitor
    #[arg(long, default_value = "")]
    email: String,
    /// 10-digit phone number of the visitor
    #[arg(long, default_value = "")]
    phone: String,
    /// The message to send
    #[arg(long, default_value = "")]
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let Environment {
            contact_form,
            mut notifications,
        } = Environment::new(&config)?;

        let fields = FormFields {
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
        };

        run(
            &contact_form,
            fields,
            &mut notifications,
            &mut std::io::stdout(),
        )
        .await
    }
}

/// Runs a single submission attempt and prints the notifications it emitted
/// followed by the resulting form.
pub async fn run(
    contact_form: &impl ContactFormService,
    fields: FormFields,
    notifications: &mut NotificationReceiver,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let result = contact_form.submit(fields).await;

    drain_notifications(notifications, out)?;
    render_form(&contact_form.state().view(), out)?;

    Ok(result?)
}

#[cfg(test)]
mod tests {
    use ezform_core_contact_contracts::{ContactSubmitError, MockContactFormService};
    use ezform_core_contact_impl::ContactFormServiceImpl;
    use ezform_extern_contracts::contact::{ContactApiError, MockContactApiService};
    use ezform_models::{
        contact::{SubmissionPayload, SubmissionStatus},
        form::FormState,
    };
    use ezform_shared_impl::notification::ChannelNotificationService;

    use super::*;

    fn fields() -> FormFields {
        FormFields {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "9876543210".into(),
            message: "hi".into(),
        }
    }

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "9876543210".into(),
            message: "hi".into(),
        }
    }

    #[tokio::test]
    async fn accepted() {
        // Arrange
        let contact_api = MockContactApiService::new().with_submit_status(payload(), 201);
        let (notification, mut notifications) = ChannelNotificationService::new();
        let contact_form = ContactFormServiceImpl::new(contact_api, notification);
        let mut out = Vec::new();

        // Act
        let result = run(&contact_form, fields(), &mut notifications, &mut out).await;

        // Assert
        result.unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("[success] Form Submitted successfully!\nGet in Touch\n"));
        assert!(out.ends_with("+ Form Submitted\n[ Send Message ]\n"));
    }

    #[tokio::test]
    async fn transport_failure() {
        // Arrange
        let contact_api = MockContactApiService::new().with_submit(
            payload(),
            Err(ContactApiError::Status {
                status: 400,
                detail: Some("Invalid phone region".into()),
            }),
        );
        let (notification, mut notifications) = ChannelNotificationService::new();
        let contact_form = ContactFormServiceImpl::new(contact_api, notification);
        let mut out = Vec::new();

        // Act
        let result = run(&contact_form, fields(), &mut notifications, &mut out).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ContactSubmitError>(),
            Some(&ContactSubmitError::Transport {
                message: "Invalid phone region".into()
            })
        );
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("[error] Invalid phone region\n"));
        assert!(out.contains("Full Name: Jane Doe\n"));
        assert!(out.ends_with("x Error submitting form\n[ Send Message ]\n"));
    }

    #[tokio::test]
    async fn invalid() {
        // Arrange
        let mut contact_form = MockContactFormService::new();
        contact_form.expect_submit().once().return_once(|fields| {
            Box::pin(std::future::ready(Err(ContactSubmitError::Invalid(
                ezform_models::validation::validate(&fields).unwrap_err(),
            ))))
        });
        contact_form.expect_state().return_const(FormState {
            status: SubmissionStatus::Idle,
            ..Default::default()
        });
        let (_notification, mut notifications) = ChannelNotificationService::new();
        let mut out = Vec::new();

        // Act
        let result = run(
            &contact_form,
            FormFields::default(),
            &mut notifications,
            &mut out,
        )
        .await;

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ContactSubmitError>(),
            Some(ContactSubmitError::Invalid(errors)) if errors.len() == 4
        ));
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Get in Touch\n"));
        assert!(out.ends_with("\n\n[ Send Message ]\n"));
    }
}
