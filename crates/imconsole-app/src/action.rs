//! Submission side-effects.
//!
//! This module defines [`SubmitAction`], the instructions produced by the
//! [`crate::Submission`] reducer for the runtime to execute.

use imconsole_core::{ApiRequest, Route};

/// Actions produced by the submission reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Re-render the view.
    Render,

    /// Issue the operation's request.
    Invoke {
        /// Backend route.
        route: Route,
        /// Request to send.
        request: ApiRequest,
    },

    /// Post a success toast.
    NotifySuccess(String),

    /// Post a danger toast.
    NotifyDanger(String),

    /// Close or reset the owning view.
    Close,
}
