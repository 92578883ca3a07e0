//! UI tool handlers.
//!
//! Each handler turns tool parameters into an editor payload, sends it
//! through the injected [`EditorConnection`] and picks the message to show.
//! Failures come back as [`UiToolError`], whose display text is the
//! user-facing `"Error creating ...: ..."` line.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use unity_mcp_bridge::EditorConnection;
use unity_mcp_core::command::{response_message, to_params};
use unity_mcp_core::{CommandName, CreateUiButton, CreateUiText, Vector3};

use crate::tools::{CreateUiButtonParams, CreateUiTextParams};

/// The UI element a handler creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiOperation {
    /// `create_ui_button`
    Button,
    /// `create_ui_text`
    Text,
}

impl UiOperation {
    /// Editor command issued for this operation.
    pub fn command(&self) -> CommandName {
        match self {
            UiOperation::Button => CommandName::CreateUiButton,
            UiOperation::Text => CommandName::CreateUiText,
        }
    }

    /// Message returned when the editor does not provide one.
    pub fn default_success(&self) -> &'static str {
        match self {
            UiOperation::Button => "UI Button created successfully",
            UiOperation::Text => "UI Text created successfully",
        }
    }

    fn failed(self, source: unity_mcp_core::Error) -> UiToolError {
        UiToolError {
            operation: self,
            source,
        }
    }
}

impl std::fmt::Display for UiOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiOperation::Button => f.write_str("UI Button"),
            UiOperation::Text => f.write_str("UI Text"),
        }
    }
}

/// A UI operation that did not complete.
#[derive(Debug, Error)]
#[error("Error creating {operation}: {source}")]
pub struct UiToolError {
    /// What was being created
    pub operation: UiOperation,
    /// Underlying failure
    pub source: unity_mcp_core::Error,
}

/// Create a UI Button in the open scene.
pub async fn create_ui_button(
    connection: &dyn EditorConnection,
    params: CreateUiButtonParams,
) -> Result<String, UiToolError> {
    let operation = UiOperation::Button;
    let position = Vector3::from_optional_slice(params.position.as_deref())
        .map_err(|e| operation.failed(e))?;

    let payload = CreateUiButton {
        name: params.name,
        position,
    };
    dispatch(connection, operation, &payload).await
}

/// Create a UI Text element in the open scene.
pub async fn create_ui_text(
    connection: &dyn EditorConnection,
    params: CreateUiTextParams,
) -> Result<String, UiToolError> {
    let operation = UiOperation::Text;
    let position = Vector3::from_optional_slice(params.position.as_deref())
        .map_err(|e| operation.failed(e))?;

    let payload = CreateUiText {
        name: params.name,
        content: params.content,
        position,
    };
    dispatch(connection, operation, &payload).await
}

async fn dispatch<T: Serialize + Sync>(
    connection: &dyn EditorConnection,
    operation: UiOperation,
    payload: &T,
) -> Result<String, UiToolError> {
    let params = to_params(payload).map_err(|e| operation.failed(e))?;
    let command = operation.command();

    let response = connection
        .send_command(command.as_str(), params)
        .await
        .map_err(|e| operation.failed(e))?;

    debug!("{} response: {:?}", command, response);

    Ok(response_message(&response)
        .unwrap_or_else(|| operation.default_success().to_string()))
}
