//! View teardown token.

use std::sync::Arc;

use tokio::sync::watch;

/// Marks a view as gone.
///
/// Clones share one flag, so every control of a view can hold the token and
/// observe a single [`trigger`](Self::trigger). The flag never resets.
#[derive(Debug, Clone)]
pub struct Teardown {
    tx: Arc<watch::Sender<bool>>,
}

impl Teardown {
    /// Token for a live view.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Mark the view as gone.
    pub fn trigger(&self) {
        if !self.tx.send_replace(true) {
            tracing::debug!("view torn down");
        }
    }

    /// Whether the view is gone.
    pub fn is_torn_down(&self) -> bool {
        *self.tx.borrow()
    }

    /// Wait until the view is gone.
    pub async fn torn_down(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so this cannot observe a closed channel.
        let _ = rx.wait_for(|down| *down).await;
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::new()
    }
}
