/// A transient, non-blocking way to tell the visitor about the outcome of a
/// submission (a toast or snackbar).
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationService: Send + Sync + 'static {
    /// Emits a success notification. Never blocks and never fails.
    fn notify_success(&self, text: &str);

    /// Emits an error notification. Never blocks and never fails.
    fn notify_error(&self, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[cfg(feature = "mock")]
impl MockNotificationService {
    pub fn with_notify_success(mut self, text: String) -> Self {
        self.expect_notify_success()
            .once()
            .with(mockall::predicate::eq(text))
            .return_const(());
        self
    }

    pub fn with_notify_error(mut self, text: String) -> Self {
        self.expect_notify_error()
            .once()
            .with(mockall::predicate::eq(text))
            .return_const(());
        self
    }
}
