//! Response envelope.
//!
//! Every backend call resolves to a [`CallResult`]: either the payload the
//! backend returned, or a human-readable message safe to show to a user.
//! Callers branch on the variant and never look at transport status codes.
//!
//! On the wire the envelope is `{"ok": true, "response": ...}` or
//! `{"ok": false, "error": "..."}`.

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{DeserializeOwned, Error as _},
    ser::SerializeMap,
};
use serde_json::Value;

/// Message used when a failure carries no usable description.
pub const FALLBACK_ERROR: &str = "An unexpected error occurred";

/// Outcome of one backend call.
///
/// Exactly one variant is populated. There is no pending state; in-flight
/// tracking belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult<T> {
    /// Call succeeded; payload passed through unmodified.
    Ok(T),
    /// Call failed; human-readable message.
    Err(String),
}

impl<T> CallResult<T> {
    /// Failure with the given message, or [`FALLBACK_ERROR`] if it is blank.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Err(FALLBACK_ERROR.to_owned())
        } else {
            Self::Err(message)
        }
    }

    /// `true` for [`CallResult::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Payload, if the call succeeded.
    pub fn response(&self) -> Option<&T> {
        match self {
            Self::Ok(response) => Some(response),
            Self::Err(_) => None,
        }
    }

    /// Error message, if the call failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Transform the payload, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallResult<U> {
        match self {
            Self::Ok(response) => CallResult::Ok(f(response)),
            Self::Err(error) => CallResult::Err(error),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, String> {
        self.into()
    }
}

impl CallResult<Value> {
    /// Interpret the payload as `T`.
    ///
    /// The envelope itself never validates payloads; this is the caller
    /// stating the shape it expects. A payload that does not fit becomes a
    /// failure naming the mismatch.
    pub fn decode<T: DeserializeOwned>(self) -> CallResult<T> {
        match self {
            Self::Ok(response) => match serde_json::from_value(response) {
                Ok(typed) => CallResult::Ok(typed),
                Err(e) => CallResult::Err(format!("unexpected response shape: {e}")),
            },
            Self::Err(error) => CallResult::Err(error),
        }
    }

    /// Build an envelope from a decoded wire body.
    ///
    /// Bodies that are not an envelope at all are treated as failures, using
    /// the most specific message [`backend_error_message`] can find.
    pub fn from_wire(body: Value) -> Self {
        match body.get("ok").and_then(Value::as_bool) {
            Some(true) => Self::Ok(body.get("response").cloned().unwrap_or(Value::Null)),
            Some(false) => Self::failure(error_text(body.get("error")).unwrap_or_default()),
            None => Self::failure(backend_error_message(&body).unwrap_or_default()),
        }
    }
}

impl<T> From<Result<T, String>> for CallResult<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(response) => Self::Ok(response),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<CallResult<T>> for Result<T, String> {
    fn from(result: CallResult<T>) -> Self {
        match result {
            CallResult::Ok(response) => Ok(response),
            CallResult::Err(error) => Err(error),
        }
    }
}

/// Most specific error description in an OpenSearch-style error body.
///
/// Looks at, in order: `error.reason`, `error.root_cause[0].reason`, `error`
/// when it is a string, and `message`. Blank strings are skipped.
pub fn backend_error_message(body: &Value) -> Option<String> {
    let candidates = [
        body.pointer("/error/reason"),
        body.pointer("/error/root_cause/0/reason"),
        body.get("error"),
        body.get("message"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

/// Text of an envelope `error` field, which may be a string or an error body.
fn error_text(error: Option<&Value>) -> Option<String> {
    match error? {
        Value::String(s) => Some(s.clone()),
        Value::Object(_) => backend_error_message(&serde_json::json!({ "error": error? })),
        _ => None,
    }
}

impl<T: Serialize> Serialize for CallResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            Self::Ok(response) => {
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("response", response)?;
            },
            Self::Err(error) => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", error)?;
            },
        }
        map.end()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for CallResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = Value::deserialize(deserializer)?;
        if body.get("ok").and_then(Value::as_bool).is_none() {
            return Err(D::Error::missing_field("ok"));
        }

        match CallResult::from_wire(body) {
            CallResult::Ok(response) => serde_json::from_value(response)
                .map(CallResult::Ok)
                .map_err(D::Error::custom),
            CallResult::Err(error) => Ok(CallResult::Err(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ok_passes_payload_through() {
        let result = CallResult::from_wire(json!({ "ok": true, "response": { "acknowledged": true } }));
        assert_eq!(result, CallResult::Ok(json!({ "acknowledged": true })));
    }

    #[test]
    fn err_uses_error_string() {
        let result = CallResult::from_wire(json!({ "ok": false, "error": "index not found" }));
        assert_eq!(result.error(), Some("index not found"));
    }

    #[test]
    fn err_without_message_falls_back() {
        // Backend reported failure but supplied only an empty response.
        let result = CallResult::from_wire(json!({ "ok": false, "response": {} }));
        assert_eq!(result.error(), Some(FALLBACK_ERROR));

        let result = CallResult::from_wire(json!({ "ok": false, "error": "   " }));
        assert_eq!(result.error(), Some(FALLBACK_ERROR));
    }

    #[test]
    fn err_with_structured_error_field() {
        let result = CallResult::from_wire(json!({
            "ok": false,
            "error": { "type": "index_not_found_exception", "reason": "no such index [x]" }
        }));
        assert_eq!(result.error(), Some("no such index [x]"));
    }

    #[test]
    fn non_envelope_body_is_failure() {
        let result = CallResult::from_wire(json!({
            "error": { "root_cause": [{ "reason": "root" }], "type": "t" },
            "status": 404
        }));
        assert_eq!(result.error(), Some("root"));
    }

    #[test]
    fn backend_message_precedence() {
        let body = json!({
            "error": { "reason": "top", "root_cause": [{ "reason": "root" }] },
            "message": "msg"
        });
        assert_eq!(backend_error_message(&body).as_deref(), Some("top"));
        assert_eq!(backend_error_message(&json!({ "message": "msg" })).as_deref(), Some("msg"));
        assert_eq!(backend_error_message(&json!({ "error": "plain" })).as_deref(), Some("plain"));
        assert_eq!(backend_error_message(&json!({ "status": 500 })), None);
    }

    #[test]
    fn decode_typed_payload() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Ack {
            acknowledged: bool,
        }

        let ok = CallResult::Ok(json!({ "acknowledged": true })).decode::<Ack>();
        assert_eq!(ok, CallResult::Ok(Ack { acknowledged: true }));

        let mismatch = CallResult::Ok(json!([1, 2])).decode::<Ack>();
        assert!(mismatch.error().is_some_and(|e| e.starts_with("unexpected response shape")));

        let err = CallResult::<Value>::Err("boom".into()).decode::<Ack>();
        assert_eq!(err, CallResult::Err("boom".into()));
    }

    #[test]
    fn serde_wire_format() {
        let ok: CallResult<Value> = CallResult::Ok(json!({ "a": 1 }));
        assert_eq!(serde_json::to_value(&ok).ok(), Some(json!({ "ok": true, "response": { "a": 1 } })));

        let err: CallResult<Value> = CallResult::Err("nope".into());
        assert_eq!(serde_json::to_value(&err).ok(), Some(json!({ "ok": false, "error": "nope" })));

        let parsed: CallResult<Vec<u32>> =
            serde_json::from_value(json!({ "ok": true, "response": [1, 2] })).expect("envelope");
        assert_eq!(parsed, CallResult::Ok(vec![1, 2]));

        assert!(serde_json::from_value::<CallResult<Value>>(json!({ "response": 1 })).is_err());
    }

    #[test]
    fn failure_blank_message_falls_back() {
        assert_eq!(CallResult::<()>::failure("").error(), Some(FALLBACK_ERROR));
        assert_eq!(CallResult::<()>::from(Err(String::new())).error(), Some(FALLBACK_ERROR));
    }
}
