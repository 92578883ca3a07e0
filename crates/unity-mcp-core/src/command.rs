//! Command types exchanged with the Unity editor.
//!
//! Every command is sent as an envelope `{"type": <name>, "params": {...}}`
//! and answered with `{"status": "success", "result": {...}}` or
//! `{"status": "error", "error": "..."}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result, Vector3};

/// Text used when the editor reports failure without a reason.
pub const UNKNOWN_EDITOR_ERROR: &str = "Unknown Unity error";

/// Commands understood by the editor bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandName {
    /// Liveness check
    #[serde(rename = "ping")]
    Ping,
    /// Create a UI Button under the scene canvas
    #[serde(rename = "CREATE_UI_BUTTON")]
    CreateUiButton,
    /// Create a UI Text element under the scene canvas
    #[serde(rename = "CREATE_UI_TEXT")]
    CreateUiText,
}

impl CommandName {
    /// Wire identifier for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::Ping => "ping",
            CommandName::CreateUiButton => "CREATE_UI_BUTTON",
            CommandName::CreateUiText => "CREATE_UI_TEXT",
        }
    }
}

impl std::fmt::Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for `CREATE_UI_BUTTON`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUiButton {
    /// GameObject name
    pub name: String,

    /// Local position; omitted from the payload when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vector3>,
}

/// Payload for `CREATE_UI_TEXT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUiText {
    /// GameObject name
    pub name: String,

    /// Displayed text
    pub content: String,

    /// Local position; omitted from the payload when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vector3>,
}

/// Serialize a payload struct into the string-keyed parameter map sent to
/// the editor.
pub fn to_params<T: Serialize>(payload: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(payload)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidInput(format!(
            "command parameters must be an object, got {other}"
        ))),
    }
}

/// Request envelope written to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Command identifier
    #[serde(rename = "type")]
    pub command: String,

    /// Command parameters
    pub params: Map<String, Value>,
}

impl CommandRequest {
    /// Build a request envelope.
    pub fn new(command: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            command: command.into(),
            params,
        }
    }
}

/// Response envelope read back from the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// `"success"` or `"error"`
    pub status: String,

    /// Command result (success only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Failure reason (error only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResponse {
    /// Unwrap the envelope into the result mapping.
    ///
    /// A missing or `null` result becomes an empty mapping.
    pub fn into_result(self) -> Result<Map<String, Value>> {
        match self.status.as_str() {
            "success" => match self.result {
                None | Some(Value::Null) => Ok(Map::new()),
                Some(Value::Object(map)) => Ok(map),
                Some(other) => Err(Error::Protocol(format!(
                    "expected an object result, got {other}"
                ))),
            },
            "error" => Err(Error::Editor(
                self.error
                    .unwrap_or_else(|| UNKNOWN_EDITOR_ERROR.to_string()),
            )),
            other => Err(Error::Protocol(format!("unknown response status '{other}'"))),
        }
    }
}

/// Read the `"message"` field of a response mapping.
///
/// Non-string messages are rendered as JSON text; `null` counts as absent.
pub fn response_message(response: &Map<String, Value>) -> Option<String> {
    match response.get("message") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
