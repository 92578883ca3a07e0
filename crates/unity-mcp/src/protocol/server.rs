//! Unity MCP Server Implementation
//!
//! This module implements the MCP server using rmcp 0.9's #[tool_router] pattern.
//! It routes MCP tool calls to the UI handlers, which forward them to the
//! Unity editor through the injected connection.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use tracing::{info, instrument, warn};

use unity_mcp_bridge::EditorConnection;

use crate::tools::*;
use crate::ui::{self, UiToolError};

/// Unity MCP Server
///
/// Exposes editor commands as MCP tools. The editor connection is supplied
/// by the caller and shared by every tool invocation.
#[derive(Clone)]
pub struct UnityMcpServer {
    /// Connection every tool sends its command through
    connection: Arc<dyn EditorConnection>,
    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl UnityMcpServer {
    /// Create a server that sends commands through `connection`.
    pub fn new(connection: Arc<dyn EditorConnection>) -> Self {
        Self {
            connection,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    /// Create a UI Button
    #[tool(
        description = "Create a UI Button in the scene. Returns a success message or error details."
    )]
    #[instrument(skip_all)]
    async fn create_ui_button(
        &self,
        Parameters(params): Parameters<CreateUiButtonParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(
            "Creating UI Button: name='{}', position={:?}",
            params.name, params.position
        );

        let outcome = ui::create_ui_button(self.connection.as_ref(), params).await;
        Ok(into_call_result(outcome))
    }

    /// Create a UI Text element
    #[tool(
        description = "Create a UI Text element in the scene. Returns a success message or error details."
    )]
    #[instrument(skip_all)]
    async fn create_ui_text(
        &self,
        Parameters(params): Parameters<CreateUiTextParams>,
    ) -> Result<CallToolResult, McpError> {
        info!(
            "Creating UI Text: name='{}', content_length={} chars, position={:?}",
            params.name,
            params.content.chars().count(),
            params.position
        );

        let outcome = ui::create_ui_text(self.connection.as_ref(), params).await;
        Ok(into_call_result(outcome))
    }
}

/// Render a handler outcome as tool output.
///
/// Failures stay inside the tool result (flagged as errors) instead of
/// becoming protocol errors, so the client always gets the message text.
fn into_call_result(outcome: Result<String, UiToolError>) -> CallToolResult {
    match outcome {
        Ok(message) => {
            info!("{}", message);
            CallToolResult::success(vec![Content::text(message)])
        }
        Err(e) => {
            warn!("{}", e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

// Implement the ServerHandler trait to define server capabilities
#[tool_handler]
impl rmcp::ServerHandler for UnityMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Unity MCP Server - Build Unity scenes from an AI assistant. \
                 Use create_ui_button and create_ui_text to add UI elements under the scene canvas; \
                 positions are optional [x, y, z] arrays. The Unity editor must be running with the MCP bridge."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
