//! Synchronous submission driver for invariant checking.

use imconsole_app::{SubmitAction, SubmitEvent, Submission};
use imconsole_core::Operation;

use crate::SubmissionSnapshot;

/// Feeds events to a [`Submission`] and counts what its actions did.
///
/// Actions are not executed; the probe only tallies them, so arbitrary event
/// orders (including resolutions nobody asked for) can be replayed.
#[derive(Debug, Clone)]
pub struct SubmissionProbe<O> {
    submission: Submission<O>,
    counts: SubmissionSnapshot,
}

impl<O: Operation> SubmissionProbe<O> {
    /// Probe around `submission`.
    pub fn new(submission: Submission<O>) -> Self {
        Self { submission, counts: SubmissionSnapshot::default() }
    }

    /// Apply one event and return the actions it produced.
    pub fn apply(&mut self, event: SubmitEvent) -> Vec<SubmitAction> {
        let was_torn_down = self.submission.is_torn_down();
        let phase_before = self.submission.phase().clone();
        let confirm_ready = match &event {
            SubmitEvent::Confirm { context_ready } => Some(*context_ready),
            _ => None,
        };
        let resolved_ok = match &event {
            SubmitEvent::Resolved(result) => Some(result.is_ok()),
            _ => None,
        };

        let actions = self.submission.handle(event);

        if was_torn_down && (!actions.is_empty() || self.submission.phase() != &phase_before) {
            self.counts.effects_after_teardown += 1;
        }

        let mut posted_success = false;
        for action in &actions {
            match action {
                SubmitAction::Invoke { .. } => {
                    self.counts.invokes += 1;
                    if confirm_ready == Some(false) {
                        self.counts.invokes_without_context += 1;
                    }
                },
                SubmitAction::NotifySuccess(_) => {
                    self.counts.success_toasts += 1;
                    posted_success = true;
                },
                SubmitAction::NotifyDanger(_) => {
                    self.counts.danger_toasts += 1;
                    if confirm_ready == Some(false) {
                        self.counts.context_failures += 1;
                    }
                },
                SubmitAction::Close => self.counts.closes += 1,
                SubmitAction::Render => {},
            }
        }

        if let Some(ok) = resolved_ok
            && !actions.is_empty()
        {
            self.counts.resolutions += 1;
            if ok && !posted_success {
                self.counts.silent_successes += 1;
            }
        }

        actions
    }

    /// Current counters and phase.
    pub fn snapshot(&self) -> SubmissionSnapshot {
        SubmissionSnapshot {
            phase: self.submission.phase().clone(),
            loading: self.submission.loading(),
            torn_down: self.submission.is_torn_down(),
            ..self.counts.clone()
        }
    }

    /// The wrapped submission.
    pub fn submission(&self) -> &Submission<O> {
        &self.submission
    }
}
