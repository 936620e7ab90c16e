//! Standard submission invariants.
//!
//! These capture behavioural properties that must always hold, not specific
//! test scenarios.

use imconsole_app::SubmitPhase;

use super::{Invariant, InvariantResult, SubmissionSnapshot, Violation};

/// The loading flag is set exactly while the phase is `Submitting`.
pub struct LoadingMatchesPhase;

impl Invariant for LoadingMatchesPhase {
    fn name(&self) -> &'static str {
        "loading_matches_phase"
    }

    fn check(&self, state: &SubmissionSnapshot) -> InvariantResult {
        let submitting = state.phase == SubmitPhase::Submitting;
        if state.loading != submitting {
            return Err(Violation {
                invariant: self.name(),
                message: format!("loading={} in phase {:?}", state.loading, state.phase),
            });
        }
        Ok(())
    }
}

/// At most one call is in flight, and one is in flight exactly while loading.
pub struct SingleFlight;

impl Invariant for SingleFlight {
    fn name(&self) -> &'static str {
        "single_flight"
    }

    fn check(&self, state: &SubmissionSnapshot) -> InvariantResult {
        let in_flight = state.in_flight();
        if !(0..=1).contains(&in_flight) || (in_flight == 1) != state.loading {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "{} invokes, {} resolutions, loading={}",
                    state.invokes, state.resolutions, state.loading
                ),
            });
        }
        Ok(())
    }
}

/// Every outcome posts exactly one toast, unless success is silent.
pub struct ToastPerOutcome;

impl Invariant for ToastPerOutcome {
    fn name(&self) -> &'static str {
        "toast_per_outcome"
    }

    fn check(&self, state: &SubmissionSnapshot) -> InvariantResult {
        let accounted = state.success_toasts + state.danger_toasts + state.silent_successes;
        if accounted != state.outcomes() {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "{} success + {} danger + {} silent toasts for {} outcomes",
                    state.success_toasts,
                    state.danger_toasts,
                    state.silent_successes,
                    state.outcomes()
                ),
            });
        }
        Ok(())
    }
}

/// A confirm without service context never reaches the transport.
pub struct NoCallWithoutContext;

impl Invariant for NoCallWithoutContext {
    fn name(&self) -> &'static str {
        "no_call_without_context"
    }

    fn check(&self, state: &SubmissionSnapshot) -> InvariantResult {
        if state.invokes_without_context > 0 {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{} calls issued without context", state.invokes_without_context),
            });
        }
        Ok(())
    }
}

/// The view is only closed in response to an outcome.
pub struct ClosesFollowOutcomes;

impl Invariant for ClosesFollowOutcomes {
    fn name(&self) -> &'static str {
        "closes_follow_outcomes"
    }

    fn check(&self, state: &SubmissionSnapshot) -> InvariantResult {
        if state.closes > state.outcomes() {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{} closes for {} outcomes", state.closes, state.outcomes()),
            });
        }
        Ok(())
    }
}

/// Nothing observable changes once the view is torn down.
pub struct FrozenAfterTeardown;

impl Invariant for FrozenAfterTeardown {
    fn name(&self) -> &'static str {
        "frozen_after_teardown"
    }

    fn check(&self, state: &SubmissionSnapshot) -> InvariantResult {
        if state.effects_after_teardown > 0 {
            return Err(Violation {
                invariant: self.name(),
                message: format!("{} events took effect after teardown", state.effects_after_teardown),
            });
        }
        Ok(())
    }
}
