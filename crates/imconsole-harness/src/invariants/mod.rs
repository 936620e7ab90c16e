//! Invariant checking for submission controls.
//!
//! Invariants are properties that must always hold, whatever order events
//! arrive in. Unlike example-based tests that check specific scenarios, they
//! are checked after every step of a generated event sequence.
//!
//! # Architecture
//!
//! [`crate::SubmissionProbe`] extracts observable counters from a running
//! submission into a [`SubmissionSnapshot`], then registered [`Invariant`]s
//! are checked against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! probe.apply(SubmitEvent::Confirm { context_ready: true });
//! registry.check_all(&probe.snapshot())?;
//! ```

mod checks;
mod snapshot;

pub use checks::{
    ClosesFollowOutcomes, FrozenAfterTeardown, LoadingMatchesPhase, NoCallWithoutContext,
    SingleFlight, ToastPerOutcome,
};
pub use snapshot::SubmissionSnapshot;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against a submission snapshot.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the current state.
    fn check(&self, state: &SubmissionSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with every submission invariant.
    ///
    /// Includes:
    /// - [`LoadingMatchesPhase`]: loading flag agrees with the phase
    /// - [`SingleFlight`]: at most one call in flight
    /// - [`ToastPerOutcome`]: one toast per finished attempt
    /// - [`NoCallWithoutContext`]: no call without a service context
    /// - [`ClosesFollowOutcomes`]: close only after an outcome
    /// - [`FrozenAfterTeardown`]: nothing happens after teardown
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(LoadingMatchesPhase);
        registry.add(SingleFlight);
        registry.add(ToastPerOutcome);
        registry.add(NoCallWithoutContext);
        registry.add(ClosesFollowOutcomes);
        registry.add(FrozenAfterTeardown);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &SubmissionSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking with every violation found.
    #[allow(clippy::panic, reason = "test assertion helper")]
    pub fn assert_all(&self, state: &SubmissionSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("Invariant violation {context}:\n  {}", messages.join("\n  "));
        }
    }
}
