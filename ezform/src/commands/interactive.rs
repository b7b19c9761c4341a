use std::io::Write;

use clap::Args;
use ezform_config::Config;
use ezform_core_contact_contracts::ContactFormService;
use ezform_models::contact::FieldName;
use ezform_shared_impl::notification::NotificationReceiver;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::{
    environment::Environment,
    render::{drain_notifications, render_form},
};

#[derive(Debug, Args)]
pub struct InteractiveCommand {}

impl InteractiveCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let Environment {
            contact_form,
            mut notifications,
        } = Environment::new(&config)?;

        run(
            &contact_form,
            BufReader::new(tokio::io::stdin()),
            &mut notifications,
            &mut std::io::stdout(),
        )
        .await
    }
}

/// Keeps one form alive and prompts for every field until the input is
/// exhausted. Pressing enter keeps the value currently shown in brackets.
///
/// Failed attempts are reported but never end the session, so the visitor can
/// correct the fields and retry.
pub async fn run(
    contact_form: &impl ContactFormService,
    input: impl AsyncBufRead + Unpin,
    notifications: &mut NotificationReceiver,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut lines = input.lines();

    render_form(&contact_form.state().view(), out)?;

    loop {
        let mut fields = contact_form.state().fields;

        for field in FieldName::ALL {
            write!(out, "{} [{}]: ", field.label(), fields.get(field))?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                return Ok(());
            };
            if !line.is_empty() {
                fields.set(field, line);
            }
        }

        if let Err(err) = contact_form.submit(fields).await {
            debug!(error = %err, "Submission attempt failed");
        }

        writeln!(out)?;
        drain_notifications(notifications, out)?;
        render_form(&contact_form.state().view(), out)?;
    }
}
