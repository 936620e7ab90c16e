//! Notification sink.

/// Process-wide toast sink.
///
/// Fire-and-forget: any component may post at any time; toasts appear in call
/// order with no dedup or coalescing.
pub trait Notifier: Send + Sync {
    /// Post a success toast.
    fn add_success(&self, message: &str);

    /// Post a danger toast.
    fn add_danger(&self, message: &str);
}

/// Notifier that writes toasts to the log.
///
/// Used by headless frontends such as the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn add_success(&self, message: &str) {
        tracing::info!(toast = "success", "{message}");
    }

    fn add_danger(&self, message: &str) {
        tracing::error!(toast = "danger", "{message}");
    }
}
