//! Scripted transport implementing the [`ApiCaller`] trait.
//!
//! `SimCaller` stands in for the HTTP client so the production
//! [`imconsole_app::SubmitControl`] runtime runs unchanged in tests. Replies
//! are scripted in order, every request is recorded, and calls can be held
//! in flight until the test releases them.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;
use imconsole_core::{ApiCaller, ApiRequest, CallResult, Route};
use serde_json::Value;
use tokio::sync::{Notify, watch};

/// A request the caller received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Route it travelled.
    pub route: Route,
    /// The request.
    pub request: ApiRequest,
}

#[derive(Default)]
struct SharedState {
    replies: VecDeque<CallResult<Value>>,
    calls: Vec<RecordedCall>,
}

/// Scripted transport for deterministic testing.
///
/// Unscripted calls succeed with `null`.
#[derive(Clone)]
pub struct SimCaller {
    state: Arc<Mutex<SharedState>>,
    /// `true` while calls are held in flight.
    hold: Arc<watch::Sender<bool>>,
    /// Signalled whenever a call arrives.
    arrived: Arc<Notify>,
}

impl Default for SimCaller {
    fn default() -> Self {
        Self::new()
    }
}

impl SimCaller {
    /// Create a caller with no scripted replies.
    pub fn new() -> Self {
        let (hold, _rx) = watch::channel(false);
        Self {
            state: Arc::new(Mutex::new(SharedState::default())),
            hold: Arc::new(hold),
            arrived: Arc::new(Notify::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue the reply for the next call.
    pub fn reply(&self, result: CallResult<Value>) -> &Self {
        self.state().replies.push_back(result);
        self
    }

    /// Queue a successful reply.
    pub fn reply_ok(&self, response: Value) -> &Self {
        self.reply(CallResult::Ok(response))
    }

    /// Queue a failed reply.
    pub fn reply_err(&self, error: &str) -> &Self {
        self.reply(CallResult::failure(error))
    }

    /// Hold every call in flight until [`release`](Self::release).
    pub fn hold(&self) {
        self.hold.send_replace(true);
    }

    /// Let held calls complete.
    pub fn release(&self) {
        self.hold.send_replace(false);
    }

    /// Wait until at least `n` calls have arrived.
    pub async fn wait_for_calls(&self, n: usize) {
        loop {
            let arrived = self.arrived.notified();
            if self.state().calls.len() >= n {
                return;
            }
            arrived.await;
        }
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state().calls.clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    async fn respond(&self, route: Route, request: ApiRequest) -> CallResult<Value> {
        tracing::debug!(endpoint = %request.endpoint, ?route, "sim call");
        self.state().calls.push(RecordedCall { route, request });
        self.arrived.notify_waiters();

        let mut held = self.hold.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = held.wait_for(|hold| !*hold).await;

        self.state().replies.pop_front().unwrap_or(CallResult::Ok(Value::Null))
    }
}

#[async_trait]
impl ApiCaller for SimCaller {
    async fn api_caller(&self, request: ApiRequest) -> CallResult<Value> {
        self.respond(Route::Direct, request).await
    }

    async fn console_proxy_caller(&self, request: ApiRequest) -> CallResult<Value> {
        self.respond(Route::ConsoleProxy, request).await
    }
}
