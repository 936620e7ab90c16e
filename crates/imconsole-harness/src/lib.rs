//! Simulation harness for console views.
//!
//! Scripted implementations of the collaborator traits so the same
//! [`imconsole_app::SubmitControl`] runtime that production uses can be driven
//! deterministically in tests.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks behavioural properties of a submission
//! over arbitrary event sequences. [`SubmissionProbe`] feeds events to a
//! reducer, counts what its actions did and produces a
//! [`SubmissionSnapshot`]; [`InvariantRegistry::standard()`] holds the checks
//! every submission must pass.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod probe;
pub mod recording;
pub mod sim_caller;

pub use invariants::{
    ClosesFollowOutcomes, FrozenAfterTeardown, Invariant, InvariantResult, InvariantRegistry,
    LoadingMatchesPhase, NoCallWithoutContext, SingleFlight, SubmissionSnapshot,
    ToastPerOutcome, Violation,
};
pub use probe::SubmissionProbe;
pub use recording::{RecordingHost, RecordingHostError, RecordingNotifier, Toast, WarningLog};
pub use sim_caller::{RecordedCall, SimCaller};
