//! Observable submission state for invariant checking.
//!
//! Snapshots capture the reducer's phase together with counters of what its
//! actions did so far. Invariants operate on snapshots rather than the live
//! reducer so every check sees one consistent point in time.

use imconsole_app::SubmitPhase;

/// Snapshot of one submission control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionSnapshot {
    /// Lifecycle phase.
    pub phase: SubmitPhase,
    /// Loading flag as reported by the reducer.
    pub loading: bool,
    /// Whether the view is torn down.
    pub torn_down: bool,
    /// Requests issued.
    pub invokes: usize,
    /// Requests issued in response to a confirm without service context.
    pub invokes_without_context: usize,
    /// Resolutions the reducer accepted.
    pub resolutions: usize,
    /// Confirms rejected for a missing service context.
    pub context_failures: usize,
    /// Success toasts posted.
    pub success_toasts: usize,
    /// Danger toasts posted.
    pub danger_toasts: usize,
    /// Accepted successful resolutions that posted no toast.
    pub silent_successes: usize,
    /// Close requests.
    pub closes: usize,
    /// Events that changed anything after teardown.
    pub effects_after_teardown: usize,
}

impl SubmissionSnapshot {
    /// Attempts that reached an outcome (resolved or rejected up front).
    pub fn outcomes(&self) -> usize {
        self.resolutions + self.context_failures
    }

    /// Calls issued but not yet resolved.
    pub fn in_flight(&self) -> isize {
        self.invokes as isize - self.resolutions as isize
    }
}
