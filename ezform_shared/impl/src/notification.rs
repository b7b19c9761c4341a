use ezform_shared_contracts::notification::{Notification, NotificationKind, NotificationService};
use tokio::sync::mpsc;
use tracing::debug;

/// Emits notifications into an unbounded channel. Whoever owns the
/// [`NotificationReceiver`] decides how they are displayed.
#[derive(Debug, Clone)]
pub struct ChannelNotificationService {
    sender: mpsc::UnboundedSender<Notification>,
}

#[derive(Debug)]
pub struct NotificationReceiver(mpsc::UnboundedReceiver<Notification>);

impl ChannelNotificationService {
    pub fn new() -> (Self, NotificationReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, NotificationReceiver(receiver))
    }

    fn emit(&self, kind: NotificationKind, text: &str) {
        let notification = Notification {
            kind,
            text: text.into(),
        };
        if let Err(err) = self.sender.send(notification) {
            debug!(
                notification = ?err.0,
                "Notification receiver is gone, dropping notification"
            );
        }
    }
}

impl NotificationService for ChannelNotificationService {
    fn notify_success(&self, text: &str) {
        self.emit(NotificationKind::Success, text);
    }

    fn notify_error(&self, text: &str) {
        self.emit(NotificationKind::Error, text);
    }
}

impl NotificationReceiver {
    /// Waits for the next notification. Returns `None` once every sender has
    /// been dropped and the channel is drained.
    pub async fn recv(&mut self) -> Option<Notification> {
        self.0.recv().await
    }

    /// Returns the next notification if one is already queued.
    pub fn try_recv(&mut self) -> Option<Notification> {
        self.0.try_recv().ok()
    }
}
