//! Testing utilities for code that talks to the editor.
//!
//! [`ScriptedConnection`] records every command it receives and answers
//! with a fixed reply, standing in for a live editor.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};

use unity_mcp_core::{Error, Result};

use crate::connection::EditorConnection;

/// A command captured by [`ScriptedConnection`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommand {
    /// Command identifier
    pub command: String,
    /// Parameters as sent
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone)]
enum Reply {
    Result(Map<String, Value>),
    Failure(String),
}

/// In-memory [`EditorConnection`] with a scripted reply.
#[derive(Debug)]
pub struct ScriptedConnection {
    reply: Reply,
    sent: Mutex<Vec<RecordedCommand>>,
}

impl ScriptedConnection {
    /// Answer every command with `result`.
    ///
    /// Non-object values are treated as an empty result.
    pub fn replying(result: Value) -> Self {
        let map = match result {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::with_reply(Reply::Result(map))
    }

    /// Fail every command with `message` as the error text.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Failure(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Commands received so far, oldest first.
    pub fn sent(&self) -> Vec<RecordedCommand> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// The most recent command, if any.
    pub fn last_sent(&self) -> Option<RecordedCommand> {
        self.sent().pop()
    }
}

#[async_trait]
impl EditorConnection for ScriptedConnection {
    async fn send_command(
        &self,
        command: &str,
        params: Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(RecordedCommand {
                command: command.to_string(),
                params,
            });
        }

        match &self.reply {
            Reply::Result(map) => Ok(map.clone()),
            Reply::Failure(message) => Err(Error::Other(message.clone())),
        }
    }
}
