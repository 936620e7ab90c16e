//! HTTP transport for the index-management console
//!
//! Implements [`imconsole_core::ApiCaller`] over the dashboards backend's two
//! caller routes. Every transport outcome (network failure, non-2xx status,
//! backend error body) is folded into a [`imconsole_core::CallResult`].
//!
//! # Components
//!
//! - [`ClientConfig`]: base URL, route paths, timeout, credentials
//! - [`HttpCaller`]: reqwest-backed caller
//! - [`envelope_from_http`]: pure status/body to envelope conversion

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod http;

pub use config::{BasicAuth, ClientConfig};
pub use error::ClientError;
pub use http::{HttpCaller, envelope_from_http};
