//! Recording collaborators.
//!
//! [`RecordingNotifier`] and [`RecordingHost`] capture what a view did so
//! tests can assert on exact toast text and close counts. [`WarningLog`]
//! captures log events at `WARN` and above.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use imconsole_app::{SubmitPhase, ViewHost};
use imconsole_core::Notifier;
use tracing::{Event, Level, Subscriber, field::Visit, subscriber::DefaultGuard};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
    registry,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A posted toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toast {
    /// Success toast.
    Success(String),
    /// Danger toast.
    Danger(String),
}

/// Notifier that records every toast in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts so far.
    pub fn toasts(&self) -> Vec<Toast> {
        lock(&self.toasts).clone()
    }

    /// Success toast texts.
    pub fn successes(&self) -> Vec<String> {
        lock(&self.toasts)
            .iter()
            .filter_map(|t| match t {
                Toast::Success(m) => Some(m.clone()),
                Toast::Danger(_) => None,
            })
            .collect()
    }

    /// Danger toast texts.
    pub fn dangers(&self) -> Vec<String> {
        lock(&self.toasts)
            .iter()
            .filter_map(|t| match t {
                Toast::Danger(m) => Some(m.clone()),
                Toast::Success(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn add_success(&self, message: &str) {
        lock(&self.toasts).push(Toast::Success(message.to_owned()));
    }

    fn add_danger(&self, message: &str) {
        lock(&self.toasts).push(Toast::Danger(message.to_owned()));
    }
}

/// Error type for the recording host.
#[derive(Debug, Clone)]
pub struct RecordingHostError(pub String);

impl std::fmt::Display for RecordingHostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecordingHostError: {}", self.0)
    }
}

impl std::error::Error for RecordingHostError {}

/// View host that records renders and close calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    /// Phase passed to every render, in order.
    pub renders: Vec<SubmitPhase>,
    /// Number of close calls.
    pub closes: usize,
    /// Make every render fail.
    pub fail_renders: bool,
}

impl RecordingHost {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase of the last render.
    pub fn last_render(&self) -> Option<&SubmitPhase> {
        self.renders.last()
    }
}

impl ViewHost for RecordingHost {
    type Error = RecordingHostError;

    fn render(&mut self, phase: &SubmitPhase) -> Result<(), Self::Error> {
        self.renders.push(phase.clone());
        if self.fail_renders {
            return Err(RecordingHostError("render disabled".into()));
        }
        Ok(())
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

/// Log layer that records the message of every `WARN` or `ERROR` event.
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl WarningLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install as the thread's default subscriber until the guard drops.
    ///
    /// Covers tasks polled on this thread, so use a current-thread runtime.
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(registry().with(self.clone()))
    }

    /// Messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for WarningLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        if level == Level::WARN || level == Level::ERROR {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            lock(&self.messages).push(visitor.0);
        }
    }
}
