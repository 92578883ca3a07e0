//! TCP connection to the editor-side bridge.

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::net::TcpStream;
use tracing::{debug, warn};

use unity_mcp_core::{CommandRequest, CommandResponse, Error, Result, UnitySettings};

use crate::connection::EditorConnection;
use crate::framing::{read_json, write_json};

/// Talks to the Unity editor over TCP.
///
/// Each command opens its own socket and closes it once the response has
/// been read, so a restarted editor is picked up on the next call.
#[derive(Debug, Clone)]
pub struct TcpEditorConnection {
    settings: UnitySettings,
}

impl TcpEditorConnection {
    /// Create a connection for the given settings.
    pub fn new(settings: UnitySettings) -> Self {
        Self { settings }
    }

    /// Settings in use.
    pub fn settings(&self) -> &UnitySettings {
        &self.settings
    }

    async fn connect(&self) -> Result<TcpStream> {
        let address = self.settings.address();
        let stream = TcpStream::connect(&address).await.map_err(|e| {
            Error::Connection(format!("could not connect to Unity at {address}: {e}"))
        })?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }

    async fn exchange(&self, request: &CommandRequest) -> Result<CommandResponse> {
        let mut stream = self.connect().await?;
        write_json(&mut stream, request).await?;
        read_json(&mut stream, self.settings.max_response_bytes).await
    }
}

#[async_trait]
impl EditorConnection for TcpEditorConnection {
    async fn send_command(
        &self,
        command: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let request = CommandRequest::new(command, params);
        debug!(
            "Sending command to {}: type={}, params={}",
            self.settings.address(),
            request.command,
            serde_json::Value::Object(request.params.clone())
        );

        let response = tokio::time::timeout(self.settings.timeout(), self.exchange(&request))
            .await
            .map_err(|_| {
                warn!(
                    "Command {} timed out after {}ms",
                    request.command, self.settings.timeout_ms
                );
                Error::Timeout(self.settings.timeout_ms)
            })??;

        debug!("Received response: status={}", response.status);
        response.into_result()
    }
}
