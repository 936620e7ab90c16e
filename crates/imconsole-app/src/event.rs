//! Submission input events.
//!
//! Events come from the user (typing, confirming), from the transport
//! (resolution of the in-flight call) and from the view's lifecycle
//! (teardown).

use imconsole_core::CallResult;
use serde_json::Value;

/// Events processed by the submission reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitEvent {
    /// Confirmation text changed.
    Input {
        /// Full text of the confirmation field.
        text: String,
    },

    /// User confirmed the action.
    Confirm {
        /// Whether the service context is available.
        context_ready: bool,
    },

    /// The in-flight call finished.
    Resolved(CallResult<Value>),

    /// The owning view is gone.
    Teardown,
}
