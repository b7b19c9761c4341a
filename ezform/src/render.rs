use std::io::{self, Write};

use ezform_models::{contact::SubmissionStatus, form::FormView};
use ezform_shared_contracts::notification::{Notification, NotificationKind};
use ezform_shared_impl::notification::NotificationReceiver;

pub const TITLE: &str = "Get in Touch";
pub const SUBTITLE: &str = "We'd love to hear from you. Please fill out the form below.";

pub fn render_form(view: &FormView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{SUBTITLE}")?;
    writeln!(out)?;

    for field in &view.fields {
        if field.value.is_empty() {
            writeln!(out, "{}: ({})", field.label, field.placeholder)?;
        } else {
            writeln!(out, "{}: {}", field.label, field.value)?;
        }
        if let Some(error) = field.error {
            writeln!(out, "  ! {error}")?;
        }
    }
    writeln!(out)?;

    if let Some(status_line) = view.status_line {
        let marker = match status_line.status {
            SubmissionStatus::Success => "+",
            SubmissionStatus::Error | SubmissionStatus::Idle => "x",
        };
        writeln!(out, "{marker} {}", status_line.text)?;
    }

    if view.submit_enabled {
        writeln!(out, "[ {} ]", view.submit_label)
    } else {
        writeln!(out, "[ {} ] (disabled)", view.submit_label)
    }
}

pub fn render_notification(notification: &Notification, out: &mut impl Write) -> io::Result<()> {
    let prefix = match notification.kind {
        NotificationKind::Success => "success",
        NotificationKind::Error => "error",
    };
    writeln!(out, "[{prefix}] {}", notification.text)
}

/// Writes every notification that is already queued.
pub fn drain_notifications(
    notifications: &mut NotificationReceiver,
    out: &mut impl Write,
) -> io::Result<()> {
    while let Some(notification) = notifications.try_recv() {
        render_notification(&notification, out)?;
    }
    Ok(())
}
