//! Wire types for the index-management console.
//!
//! Every call the console makes to the dashboards backend is described by an
//! [`ApiRequest`] (an endpoint name plus opaque data) and answered with a
//! [`CallResult`] envelope. This crate only defines those shapes; it performs
//! no I/O.
//!
//! # Components
//!
//! - [`Endpoint`]: validated backend operation name (`indices.flush`, ...)
//! - [`ApiRequest`]: endpoint descriptor sent to the proxy
//! - [`TransportRequest`]: generic `{ method, path, body }` passthrough
//! - [`CallResult`]: success-or-message envelope returned by every call

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod endpoint;
pub mod envelope;
pub mod errors;
pub mod paths;
pub mod request;

pub use endpoint::Endpoint;
pub use envelope::{CallResult, FALLBACK_ERROR, backend_error_message};
pub use errors::DescriptorError;
pub use request::{ApiRequest, HttpMethod, TransportRequest};
