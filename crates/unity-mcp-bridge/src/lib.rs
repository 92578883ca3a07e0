//! # unity-mcp-bridge
//!
//! Connection to the Unity editor for the Unity MCP Server.
//!
//! This crate provides:
//! - The `EditorConnection` trait every tool sends commands through
//! - A TCP implementation talking to the editor-side bridge
//! - JSON message framing for that socket
//! - A scripted connection for tests
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on unity-mcp-core and is
//! injected into the MCP server in unity-mcp.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod connection;
pub mod framing;
pub mod tcp;
pub mod testing;

// Re-export commonly used types
pub use connection::EditorConnection;
pub use tcp::TcpEditorConnection;
pub use testing::ScriptedConnection;
