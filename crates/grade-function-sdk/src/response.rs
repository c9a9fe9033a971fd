//! HTTP Response representation for handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an outgoing HTTP response in the gateway's envelope format.
///
/// The gateway expects `{"statusCode": ..., "headers": {...}, "body": "..."}`
/// where `body` is itself a JSON-encoded string, so handlers serialize their
/// payload into it rather than nesting an object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Response body, already serialized
    #[serde(default)]
    pub body: String,
}

impl Response {
    /// Create a new response with the given status code and empty body.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    /// Create a JSON response with the given status code.
    ///
    /// Sets the `Content-Type` header and serializes the body.
    ///
    /// # Example
    /// ```ignore
    /// Response::json(200, json!({"message": "OK"}))
    /// Response::json(400, json!({"success": false, "message": "Invalid input"}))
    /// ```
    pub fn json<T: Serialize>(status_code: u16, body: T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code,
            headers,
            body: serde_json::to_string(&body).unwrap_or_default(),
        }
    }

    /// Create a 200 OK response with JSON body.
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add the CORS headers browser callers expect.
    ///
    /// The grade service is invoked cross-origin via POST, so every response
    /// (including errors and the OPTIONS preflight) carries the same
    /// permissive set.
    pub fn with_cors(self) -> Self {
        self.with_header("Access-Control-Allow-Origin", "*")
            .with_header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .with_header("Access-Control-Allow-Headers", "Content-Type")
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_sets_content_type_and_serializes() {
        let response = Response::json(200, json!({"message": "OK"}));
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({"message": "OK"}));
    }

    #[test]
    fn test_with_cors_header_set() {
        let response = Response::json(200, json!({})).with_cors();
        assert_eq!(response.headers.len(), 4);
        assert_eq!(
            response
                .headers
                .get("Access-Control-Allow-Origin")
                .map(String::as_str),
            Some("*")
        );
        assert_eq!(
            response
                .headers
                .get("Access-Control-Allow-Methods")
                .map(String::as_str),
            Some("POST, OPTIONS")
        );
        assert_eq!(
            response
                .headers
                .get("Access-Control-Allow-Headers")
                .map(String::as_str),
            Some("Content-Type")
        );
    }

    #[test]
    fn test_envelope_field_names() {
        let response = Response::json(200, json!({"ok": true})).with_cors();
        let wire: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert!(wire.get("statusCode").is_some());
        assert!(wire.get("headers").is_some());
        assert!(wire["body"].is_string());
    }
}
