//! Unity MCP Server Library
//!
//! This library contains the MCP protocol layer, tool parameter types and
//! the UI handlers. The actual server binary is in main.rs.

pub mod protocol;
pub mod tools;
pub mod ui;

// Re-export commonly used types
pub use protocol::UnityMcpServer;
pub use tools::*;
pub use ui::{UiOperation, UiToolError};
