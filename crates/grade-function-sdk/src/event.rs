//! Invocation event helpers for handlers
//!
//! The gateway delivers each invocation as a raw JSON value. HTTP-gateway
//! style events wrap the caller's payload in a JSON-encoded `body` string;
//! direct invocations pass the payload as the event itself. Handlers use the
//! helpers here instead of reimplementing that unwrapping.

use serde_json::{Map, Value as JsonValue};

use crate::error::HandlerError;

/// Per-invocation execution context assigned by the host.
///
/// Handlers accept it for interface compatibility with the host contract.
/// The request id is used by the invocation loop for tracing.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub request_id: String,
}

/// Get the gateway-reported HTTP method, if the event carries one.
pub fn http_method(event: &JsonValue) -> Option<&str> {
    event.get("httpMethod").and_then(JsonValue::as_str)
}

/// Extract the working payload object from an invocation event.
///
/// If the event has a `body` key, its value must be a JSON-encoded string
/// decoding to a JSON object. Otherwise the event itself is the payload.
/// Anything else (non-object event, non-string `body`, malformed body text,
/// body decoding to a non-object) is an internal fault, not a validation
/// failure: the caller's fields were never reached.
pub fn payload_object(event: &JsonValue) -> Result<Map<String, JsonValue>, HandlerError> {
    let envelope = event
        .as_object()
        .ok_or_else(|| HandlerError::Unexpected("event is not a JSON object".into()))?;

    match envelope.get("body") {
        None => Ok(envelope.clone()),
        Some(JsonValue::String(raw)) => {
            let payload: JsonValue = serde_json::from_str(raw)?;
            payload
                .as_object()
                .cloned()
                .ok_or_else(|| HandlerError::Unexpected("request body is not a JSON object".into()))
        }
        Some(_) => Err(HandlerError::Unexpected(
            "request body is not a JSON-encoded string".into(),
        )),
    }
}
