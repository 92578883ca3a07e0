//! The connection seam between MCP tools and the editor.

use async_trait::async_trait;
use serde_json::{Map, Value};

use unity_mcp_core::{CommandName, Result};

/// Something that can deliver a named command to the Unity editor.
///
/// Implementations decide how the command travels; callers only see the
/// result mapping or an error. Every call stands alone: no state is carried
/// between commands.
#[async_trait]
pub trait EditorConnection: Send + Sync {
    /// Send `command` with `params` and return the editor's result mapping.
    async fn send_command(
        &self,
        command: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>>;

    /// Check that the editor answers.
    async fn ping(&self) -> Result<()> {
        self.send_command(CommandName::Ping.as_str(), Map::new())
            .await
            .map(|_| ())
    }
}
