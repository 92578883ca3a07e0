//! # unity-mcp-core
//!
//! Core types for the Unity MCP Server.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other unity-mcp crates. It provides:
//!
//! - Geometry types (Vector3)
//! - Command types (command names, request/response envelopes, UI payloads)
//! - Configuration types
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other unity-mcp crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod config;
pub mod error;
pub mod geometry;

// Re-export commonly used types
pub use command::{CommandName, CommandRequest, CommandResponse, CreateUiButton, CreateUiText};
pub use config::{ServerConfig, ServerSettings, UnitySettings};
pub use error::{Error, Result};
pub use geometry::Vector3;
