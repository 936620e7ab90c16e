//! Console core
//!
//! Collaborator contracts and backend operations shared by every console view.
//! Nothing here renders or owns UI state; views drive these pieces through the
//! state machines in `imconsole-app`.
//!
//! # Components
//!
//! - [`ApiCaller`]: transport collaborator returning [`CallResult`] envelopes
//! - [`Notifier`]: process-wide toast sink
//! - [`Services`]: service context handed to views (absent until ready)
//! - [`Operation`]: a mutating action with its request and toast text
//! - [`ops`]: the concrete operations (flush, delete aliases, ...)
//! - [`queries`]: read-only calls (lron config, templates)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aliases;
pub mod lron;
mod notify;
pub mod ops;
pub mod queries;
mod services;
pub mod settings;

pub use imconsole_proto::{
    ApiRequest, CallResult, Endpoint, FALLBACK_ERROR, TransportRequest, backend_error_message,
};
pub use notify::{LogNotifier, Notifier};
pub use ops::Operation;
pub use services::{ApiCaller, CONTEXT_MISSING, Route, ServiceContext, Services};
