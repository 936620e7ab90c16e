//! Submission runtime.
//!
//! [`SubmitControl`] drives one [`Submission`], coordinating between:
//! - [`Submission`]: the lifecycle reducer
//! - [`Services`](imconsole_core::Services): the backend, if ready
//! - [`Notifier`]: the shared toast sink
//! - [`ViewHost`]: the view that renders and closes

use std::sync::Arc;

use imconsole_core::{ApiRequest, Notifier, Operation, Route, ServiceContext};
use tokio::sync::Mutex;

use crate::{SubmitAction, SubmitEvent, SubmitPhase, Submission, Teardown, ViewHost};

struct Shared<O, H> {
    submission: Submission<O>,
    host: H,
}

/// Runtime for one confirm control.
///
/// Clones drive the same control. The lock is never held across the backend
/// call, so a second [`confirm`](Self::confirm) while a call is in flight
/// reaches the reducer and is dropped there instead of queueing.
///
/// # Type Parameters
///
/// - `O`: Operation issued on confirm
/// - `H`: View hosting the control
pub struct SubmitControl<O, H> {
    shared: Arc<Mutex<Shared<O, H>>>,
    context: ServiceContext,
    notifier: Arc<dyn Notifier>,
    teardown: Teardown,
}

impl<O, H> Clone for SubmitControl<O, H> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            context: self.context.clone(),
            notifier: Arc::clone(&self.notifier),
            teardown: self.teardown.clone(),
        }
    }
}

impl<O, H> SubmitControl<O, H>
where
    O: Operation,
    H: ViewHost,
{
    /// Create a control for `submission` hosted by `host`.
    pub fn new(
        submission: Submission<O>,
        host: H,
        context: ServiceContext,
        notifier: Arc<dyn Notifier>,
        teardown: Teardown,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared { submission, host })),
            context,
            notifier,
            teardown,
        }
    }

    /// Update the confirmation text.
    pub async fn input(&self, text: impl Into<String>) {
        self.dispatch(SubmitEvent::Input { text: text.into() }).await;
    }

    /// Confirm the action and wait for it to resolve.
    ///
    /// Returns immediately if the reducer did not start a call: already
    /// loading, gate closed, context missing or torn down.
    pub async fn confirm(&self) {
        let event = SubmitEvent::Confirm { context_ready: self.context.is_some() };
        let Some((route, request)) = self.dispatch(event).await else {
            return;
        };
        let Some(services) = &self.context else {
            return;
        };

        let result = services.call(route, request).await;
        self.dispatch(SubmitEvent::Resolved(result)).await;
    }

    /// Tear the view down. Results still in flight are dropped.
    pub async fn teardown(&self) {
        self.teardown.trigger();
        self.dispatch(SubmitEvent::Teardown).await;
    }

    /// Current phase.
    pub async fn phase(&self) -> SubmitPhase {
        self.shared.lock().await.submission.phase().clone()
    }

    /// Whether a call is in flight.
    pub async fn loading(&self) -> bool {
        self.shared.lock().await.submission.loading()
    }

    /// Whether the confirm button is enabled.
    pub async fn can_confirm(&self) -> bool {
        self.shared.lock().await.submission.can_confirm()
    }

    /// Inspect the host.
    pub async fn with_host<R>(&self, f: impl FnOnce(&H) -> R) -> R {
        f(&self.shared.lock().await.host)
    }

    /// Feed one event to the reducer and execute its actions.
    ///
    /// Returns the request to issue, if the reducer asked for one.
    async fn dispatch(&self, event: SubmitEvent) -> Option<(Route, ApiRequest)> {
        let mut shared = self.shared.lock().await;
        let Shared { submission, host } = &mut *shared;

        if self.teardown.is_torn_down() && !submission.is_torn_down() {
            submission.handle(SubmitEvent::Teardown);
        }

        let mut invoke = None;
        for action in submission.handle(event) {
            match action {
                SubmitAction::Render => {
                    if let Err(e) = host.render(submission.phase()) {
                        tracing::warn!("Failed to render: {e}");
                    }
                },
                SubmitAction::Close => host.close(),
                SubmitAction::NotifySuccess(message) => self.notifier.add_success(&message),
                SubmitAction::NotifyDanger(message) => self.notifier.add_danger(&message),
                SubmitAction::Invoke { route, request } => invoke = Some((route, request)),
            }
        }
        invoke
    }
}
