//! Submission lifecycle reducer.
//!
//! [`Submission`] wraps one [`Operation`] and owns the state of a single
//! confirm control. It is a pure state machine: it consumes
//! [`crate::SubmitEvent`]s and produces [`crate::SubmitAction`]s for the
//! runtime to execute.
//!
//! # Responsibilities
//!
//! - Enforces at most one call in flight; a confirm while loading is dropped.
//! - Turns a missing service context into an immediate failure.
//! - Emits exactly one toast per resolved attempt.
//! - Ignores every event once torn down.

use imconsole_core::{CONTEXT_MISSING, CallResult, Operation};
use serde_json::Value;

use crate::{ConfirmGate, SubmitAction, SubmitEvent, SubmitPhase};

/// Submission state machine for one confirm control.
#[derive(Debug, Clone)]
pub struct Submission<O> {
    /// Operation issued on confirm.
    operation: O,
    /// Lifecycle phase.
    phase: SubmitPhase,
    /// Typed confirmation. `None` if confirming needs no phrase.
    gate: Option<ConfirmGate>,
    /// Set once the owning view is gone.
    torn_down: bool,
}

impl<O: Operation> Submission<O> {
    /// Idle submission for `operation`.
    pub fn new(operation: O) -> Self {
        Self { operation, phase: SubmitPhase::Idle, gate: None, torn_down: false }
    }

    /// Require a typed confirmation before the action is enabled.
    #[must_use]
    pub fn with_gate(mut self, gate: ConfirmGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: SubmitEvent) -> Vec<SubmitAction> {
        if self.torn_down {
            tracing::debug!(?event, "event after teardown dropped");
            return vec![];
        }

        match event {
            SubmitEvent::Input { text } => match &mut self.gate {
                Some(gate) => {
                    gate.set_input(text);
                    vec![SubmitAction::Render]
                },
                None => vec![],
            },
            SubmitEvent::Confirm { context_ready } => self.confirm(context_ready),
            SubmitEvent::Resolved(result) => self.resolve(result),
            SubmitEvent::Teardown => {
                self.torn_down = true;
                vec![]
            },
        }
    }

    fn confirm(&mut self, context_ready: bool) -> Vec<SubmitAction> {
        if self.phase.is_loading() {
            tracing::debug!("confirm ignored while submitting");
            return vec![];
        }
        if !self.can_confirm() {
            tracing::debug!("confirm ignored while disabled");
            return vec![];
        }

        if !context_ready {
            self.phase = SubmitPhase::Failed { error: CONTEXT_MISSING.to_owned() };
            return vec![
                SubmitAction::NotifyDanger(CONTEXT_MISSING.to_owned()),
                SubmitAction::Close,
                SubmitAction::Render,
            ];
        }

        self.phase = SubmitPhase::Submitting;
        vec![
            SubmitAction::Render,
            SubmitAction::Invoke {
                route: self.operation.route(),
                request: self.operation.request(),
            },
        ]
    }

    fn resolve(&mut self, result: CallResult<Value>) -> Vec<SubmitAction> {
        if !self.phase.is_loading() {
            tracing::warn!("resolution without a call in flight ignored");
            return vec![];
        }

        let mut actions = Vec::with_capacity(3);
        match result {
            CallResult::Ok(_) => {
                self.phase = SubmitPhase::Succeeded;
                if let Some(message) = self.operation.success_message() {
                    actions.push(SubmitAction::NotifySuccess(message));
                }
                actions.push(SubmitAction::Close);
            },
            CallResult::Err(error) => {
                self.phase = SubmitPhase::Failed { error: error.clone() };
                actions.push(SubmitAction::NotifyDanger(error));
                if self.operation.closes_on_failure() {
                    actions.push(SubmitAction::Close);
                }
            },
        }
        actions.push(SubmitAction::Render);
        actions
    }

    /// Operation issued on confirm.
    pub fn operation(&self) -> &O {
        &self.operation
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Whether a call is in flight.
    pub fn loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Whether the confirm button is enabled.
    pub fn can_confirm(&self) -> bool {
        !self.phase.is_loading()
            && self.operation.is_ready()
            && self.gate.as_ref().is_none_or(ConfirmGate::is_open)
    }

    /// Typed confirmation, if one is required.
    pub fn gate(&self) -> Option<&ConfirmGate> {
        self.gate.as_ref()
    }

    /// Whether the owning view is gone.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
