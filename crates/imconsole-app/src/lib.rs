//! Application layer for the index-management console
//!
//! Pure state machines and a generic runtime for console views, so the same
//! submission logic runs in production frontends and in simulation.
//!
//! # Components
//!
//! - [`Submission`]: submission lifecycle reducer (Idle, Submitting, resolved)
//! - [`ConfirmGate`]: typed confirmation phrase for destructive actions
//! - [`AliasesView`]: aliases table state machine with debounced refetch
//! - [`ViewHost`]: trait for the view that renders and closes
//! - [`SubmitControl`]: runtime executing a submission against services
//! - [`Teardown`]: token marking a view as gone

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
pub mod aliases;
mod confirm;
mod debounce;
mod event;
mod host;
pub mod modal;
mod runtime;
mod state;
mod submission;
mod teardown;

pub use action::SubmitAction;
pub use aliases::{AliasQuery, AliasesAction, AliasesEvent, AliasesView, SortDirection};
pub use confirm::{ConfirmGate, DELETE_PHRASE};
pub use debounce::Debouncer;
pub use event::SubmitEvent;
pub use host::ViewHost;
pub use runtime::SubmitControl;
pub use state::SubmitPhase;
pub use submission::Submission;
pub use teardown::Teardown;
