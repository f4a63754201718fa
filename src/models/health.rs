use serde::Deserialize;
use serde_json::Value;

/// Value shown when the backend answers without a `status` field.
pub const DEFAULT_STATUS: &str = "ok";

/// Body returned by `GET /api/v1/health`.
///
/// Any JSON document is accepted; only the `status` and `service` fields of an
/// object are looked at.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HealthResponse(Value);

impl HealthResponse {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Status reported by the backend, or [`DEFAULT_STATUS`].
    ///
    /// A missing or `null` field falls back to the default; non-string
    /// scalars are shown as their JSON text.
    pub fn status(&self) -> String {
        match self.0.get("status") {
            None | Some(Value::Null) => DEFAULT_STATUS.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Name of the backend service, if it reports one.
    pub fn service(&self) -> Option<&str> {
        self.0.get("service").and_then(Value::as_str)
    }
}
