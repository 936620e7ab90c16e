//! Aliases table driven against the scripted caller.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use imconsole_app::{AliasQuery, AliasesAction, AliasesEvent, AliasesView};
use imconsole_core::{Notifier, Route, Services};
use imconsole_harness::{RecordingNotifier, SimCaller};
use serde_json::json;

/// Execute view actions the way a frontend would, feeding fetch results back.
async fn drive(
    view: &mut AliasesView<Instant>,
    services: &Services,
    notifier: &RecordingNotifier,
    locations: &mut Vec<String>,
    event: AliasesEvent<Instant>,
) {
    let mut pending = view.handle(event);
    while !pending.is_empty() {
        for action in std::mem::take(&mut pending) {
            match action {
                AliasesAction::Render => {},
                AliasesAction::SyncQuery(query) => locations.push(query),
                AliasesAction::NotifyDanger(message) => notifier.add_danger(&message),
                AliasesAction::Fetch { seq, request } => {
                    let result = services.call(Route::Direct, request).await;
                    pending.extend(view.handle(AliasesEvent::Loaded { seq, result }));
                },
            }
        }
    }
}

fn rows() -> serde_json::Value {
    json!([
        { "alias": "logs", "index": "logs-1", "is_write_index": "false" },
        { "alias": "metrics", "index": "metrics-1" },
        { "alias": "logs", "index": "logs-2", "is_write_index": "true" }
    ])
}

#[tokio::test]
async fn mount_loads_grouped_page() {
    let caller = SimCaller::new();
    caller.reply_ok(rows());
    let services = Services::new(Arc::new(caller.clone()));
    let notifier = RecordingNotifier::new();
    let mut locations = Vec::new();
    let mut view = AliasesView::new(AliasQuery::from_query_string("?search=lo&size=5"));

    drive(&mut view, &services, &notifier, &mut locations, AliasesEvent::Mount {
        now: Instant::now(),
    })
    .await;

    let calls = caller.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].request.data,
        Some(json!({ "format": "json", "name": "lo*", "s": "alias:desc" }))
    );
    assert_eq!(locations, vec!["from=0&search=lo&size=5&sortDirection=desc&sortField=alias"]);

    assert_eq!(view.total(), 2);
    assert_eq!(view.rows()[0].alias, "logs");
    assert_eq!(view.rows()[0].indices, vec!["logs-1", "logs-2"]);
    assert!(!view.loading());
    assert!(notifier.toasts().is_empty());
}

#[tokio::test]
async fn typing_burst_fetches_twice() {
    let caller = SimCaller::new();
    caller.reply_ok(json!([])).reply_ok(json!([]));
    let services = Services::new(Arc::new(caller.clone()));
    let notifier = RecordingNotifier::new();
    let mut locations = Vec::new();
    let mut view = AliasesView::new(AliasQuery::default());
    let t0 = Instant::now();
    let at = |ms| t0 + Duration::from_millis(ms);

    for (i, text) in ["l", "lo", "log", "logs"].into_iter().enumerate() {
        let event = AliasesEvent::SearchChange { text: text.into(), now: at(i as u64 * 100) };
        drive(&mut view, &services, &notifier, &mut locations, event).await;
    }
    assert_eq!(caller.call_count(), 1);
    assert!(view.refetch_pending());

    drive(&mut view, &services, &notifier, &mut locations, AliasesEvent::Tick { now: at(500) })
        .await;
    assert_eq!(caller.call_count(), 1);

    drive(&mut view, &services, &notifier, &mut locations, AliasesEvent::Tick { now: at(800) })
        .await;
    assert_eq!(caller.call_count(), 2);
    assert_eq!(caller.calls()[1].request.data.as_ref().map(|d| d["name"].clone()), Some(json!(
        "logs*"
    )));
    assert!(!view.refetch_pending());
    assert!(notifier.toasts().is_empty());
}

#[tokio::test]
async fn fetch_failure_toasts_and_keeps_rows() {
    let caller = SimCaller::new();
    caller.reply_ok(rows()).reply_err("security_exception");
    let services = Services::new(Arc::new(caller.clone()));
    let notifier = RecordingNotifier::new();
    let mut locations = Vec::new();
    let mut view = AliasesView::new(AliasQuery::default());
    let t0 = Instant::now();

    drive(&mut view, &services, &notifier, &mut locations, AliasesEvent::Mount { now: t0 }).await;
    drive(&mut view, &services, &notifier, &mut locations, AliasesEvent::Refresh {
        now: t0 + Duration::from_secs(1),
    })
    .await;

    assert_eq!(caller.call_count(), 2);
    assert_eq!(notifier.dangers(), vec!["security_exception".to_owned()]);
    assert_eq!(view.total(), 2);
}
