//! Property-based tests for the submission reducer.
//!
//! Invariants are checked after every event of arbitrary sequences, so
//! re-entrant confirms, stray resolutions and late results after teardown are
//! all exercised.

use imconsole_app::{SubmitEvent, Submission, modal};
use imconsole_core::{
    CallResult,
    lron::LronConfig,
    ops::{AssociateLron, FlushTarget},
};
use imconsole_harness::{InvariantRegistry, SubmissionProbe};
use proptest::prelude::*;
use serde_json::Value;

/// Generate random submission events.
fn event_strategy() -> impl Strategy<Value = SubmitEvent> {
    prop_oneof![
        4 => any::<bool>().prop_map(|context_ready| SubmitEvent::Confirm { context_ready }),
        2 => Just(SubmitEvent::Resolved(CallResult::Ok(Value::Null))),
        2 => "[a-z]{0,6}".prop_map(|e| SubmitEvent::Resolved(CallResult::failure(e))),
        2 => prop::sample::select(vec!["delete", "delet", "Delete", "delete "])
            .prop_map(|text| SubmitEvent::Input { text: text.to_owned() }),
        1 => Just(SubmitEvent::Teardown),
    ]
}

fn run<O: imconsole_core::Operation>(submission: Submission<O>, events: Vec<SubmitEvent>) {
    let registry = InvariantRegistry::standard();
    let mut probe = SubmissionProbe::new(submission);

    for (step, event) in events.into_iter().enumerate() {
        probe.apply(event);
        registry.assert_all(&probe.snapshot(), &format!("after step {step}"));
    }
}

proptest! {
    #[test]
    fn prop_flush_invariants_hold(events in prop::collection::vec(event_strategy(), 0..60)) {
        run(modal::flush(FlushTarget::Indices, ["a", "b"]), events);
    }

    #[test]
    fn prop_gated_delete_invariants_hold(events in prop::collection::vec(event_strategy(), 0..60)) {
        run(modal::delete_aliases(["a"]), events);
    }

    #[test]
    fn prop_silent_success_invariants_hold(events in prop::collection::vec(event_strategy(), 0..60)) {
        let op = AssociateLron { task_id: "t".into(), config: LronConfig::default() };
        run(Submission::new(op), events);
    }

    #[test]
    fn prop_one_request_per_confirmed_attempt(
        confirms in 1usize..10,
        outcomes in prop::collection::vec(any::<bool>(), 1..10),
    ) {
        let mut probe = SubmissionProbe::new(modal::flush(FlushTarget::Indices, ["x"]));
        for ok in outcomes {
            for _ in 0..confirms {
                probe.apply(SubmitEvent::Confirm { context_ready: true });
            }
            let result = if ok { CallResult::Ok(Value::Null) } else { CallResult::failure("e") };
            probe.apply(SubmitEvent::Resolved(result));
        }
        let snapshot = probe.snapshot();
        prop_assert_eq!(snapshot.invokes, snapshot.resolutions);
    }
}
