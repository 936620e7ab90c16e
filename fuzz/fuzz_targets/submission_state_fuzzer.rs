//! Fuzz target for the submission reducer
//!
//! # Strategy
//!
//! - Arbitrary interleavings of confirm, input, resolution and teardown
//! - Gated (delete) and ungated (flush) controls
//!
//! # Invariants
//!
//! Every invariant in the standard registry holds after every event.

#![no_main]

use arbitrary::Arbitrary;
use imconsole_app::{SubmitEvent, modal};
use imconsole_core::{CallResult, ops::FlushTarget};
use imconsole_harness::{InvariantRegistry, SubmissionProbe};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Confirm { context_ready: bool },
    Input(String),
    ResolveOk,
    ResolveErr(String),
    Teardown,
}

impl Op {
    fn into_event(self) -> SubmitEvent {
        match self {
            Op::Confirm { context_ready } => SubmitEvent::Confirm { context_ready },
            Op::Input(text) => SubmitEvent::Input { text },
            Op::ResolveOk => SubmitEvent::Resolved(CallResult::Ok(Value::Null)),
            Op::ResolveErr(e) => SubmitEvent::Resolved(CallResult::failure(e)),
            Op::Teardown => SubmitEvent::Teardown,
        }
    }
}

fuzz_target!(|input: (bool, Vec<Op>)| {
    let (gated, ops) = input;
    let registry = InvariantRegistry::standard();

    if gated {
        let mut probe = SubmissionProbe::new(modal::delete_aliases(["a", "b"]));
        for op in ops {
            probe.apply(op.into_event());
            registry.assert_all(&probe.snapshot(), "delete");
        }
    } else {
        let mut probe = SubmissionProbe::new(modal::flush(FlushTarget::Indices, ["a", "b"]));
        for op in ops {
            probe.apply(op.into_event());
            registry.assert_all(&probe.snapshot(), "flush");
        }
    }
});
