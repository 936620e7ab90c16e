//! Fuzz target for envelope decoding
//!
//! Feeds arbitrary bytes through the paths a backend response takes:
//! - JSON body into `CallResult::from_wire`
//! - Typed payload access via `decode`
//! - Wire deserialization of the envelope itself
//! - Endpoint descriptor parsing
//!
//! Nothing here may panic, and a failure must always carry a message.

#![no_main]

use imconsole_proto::{CallResult, Endpoint};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Endpoint::parse(text);
    }

    let Ok(body) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let envelope = CallResult::from_wire(body.clone());
    if let Some(error) = envelope.error() {
        assert!(!error.trim().is_empty(), "blank failure message");
    }
    let _ = envelope.decode::<Vec<String>>();

    let _ = serde_json::from_value::<CallResult<Value>>(body);
});
