//! Descriptor construction errors.
//!
//! These are the only errors this layer reports through `Result`. Backend and
//! transport failures never surface here; they are carried inside
//! [`crate::CallResult::Err`].

use thiserror::Error;

/// A request descriptor could not be built.
///
/// Indicates a caller bug (a misspelled or empty endpoint name), not a runtime
/// condition to recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Endpoint name was empty.
    #[error("endpoint name is empty")]
    EmptyEndpoint,

    /// Endpoint name contained an empty or invalid segment.
    #[error("invalid endpoint name {name:?}: segment {segment:?} is not an identifier")]
    InvalidSegment {
        /// Full endpoint name as given.
        name: String,
        /// Offending dot-separated segment.
        segment: String,
    },
}
