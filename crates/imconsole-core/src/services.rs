//! Transport collaborator and service context.
//!
//! The [`ApiCaller`] trait decouples views from how requests reach the
//! backend. Production uses the HTTP client in `imconsole-client`; tests use a
//! scripted caller. Either way the result is a [`CallResult`] envelope and
//! never a Rust error.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use imconsole_proto::{ApiRequest, CallResult};
use serde_json::Value;

/// Danger toast raised when a view acts before its service context is ready.
pub const CONTEXT_MISSING: &str = "Something is wrong in ServiceContext";

/// Which backend route a request travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Direct API caller route.
    #[default]
    Direct,
    /// Console proxy route (same envelope, different backend handler).
    ConsoleProxy,
}

/// Transport collaborator.
///
/// Implementations translate transport outcomes into envelopes: network
/// failures, non-2xx statuses and backend-reported errors all become
/// [`CallResult::Err`] with the most specific message available.
///
/// # Invariants
///
/// - Never panics for expected failure modes.
/// - Does not raise notifications or touch view state.
#[async_trait]
pub trait ApiCaller: Send + Sync {
    /// Invoke an endpoint through the direct route.
    async fn api_caller(&self, request: ApiRequest) -> CallResult<Value>;

    /// Invoke an endpoint through the console proxy route.
    ///
    /// Defaults to the direct route for transports with a single entry point.
    async fn console_proxy_caller(&self, request: ApiRequest) -> CallResult<Value> {
        self.api_caller(request).await
    }
}

/// Services made available to views.
#[derive(Clone)]
pub struct Services {
    caller: Arc<dyn ApiCaller>,
}

/// Service context as seen by a view: `None` until the services are ready.
pub type ServiceContext = Option<Services>;

impl Services {
    /// Wrap a transport collaborator.
    pub fn new(caller: Arc<dyn ApiCaller>) -> Self {
        Self { caller }
    }

    /// Dispatch a request on the given route.
    pub async fn call(&self, route: Route, request: ApiRequest) -> CallResult<Value> {
        tracing::debug!(endpoint = %request.endpoint, ?route, "dispatching backend call");
        let result = match route {
            Route::Direct => self.caller.api_caller(request).await,
            Route::ConsoleProxy => self.caller.console_proxy_caller(request).await,
        };
        if let CallResult::Err(error) = &result {
            tracing::warn!(%error, "backend call failed");
        }
        result
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
