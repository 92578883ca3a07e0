//! MCP Tool Types
//!
//! Parameter types for the UI tools. Defaults mirror what the editor would
//! pick on its own, so every field may be omitted by the client.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default name for a new button.
pub const DEFAULT_BUTTON_NAME: &str = "New Button";

/// Default name for a new text element.
pub const DEFAULT_TEXT_NAME: &str = "New Text";

/// Default displayed text for a new text element.
pub const DEFAULT_TEXT_CONTENT: &str = "New Text";

// =============================================================================
// UI Tools
// =============================================================================

/// Parameters for create_ui_button
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateUiButtonParams {
    /// Name for the button (default: "New Button")
    #[serde(default = "default_button_name")]
    pub name: String,

    /// Optional [x, y, z] position for the button
    #[serde(default)]
    pub position: Option<Vec<f64>>,
}

impl Default for CreateUiButtonParams {
    fn default() -> Self {
        Self {
            name: default_button_name(),
            position: None,
        }
    }
}

/// Parameters for create_ui_text
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateUiTextParams {
    /// Name for the text element (default: "New Text")
    #[serde(default = "default_text_name")]
    pub name: String,

    /// Text content to display (default: "New Text")
    #[serde(default = "default_text_content")]
    pub content: String,

    /// Optional [x, y, z] position for the text
    #[serde(default)]
    pub position: Option<Vec<f64>>,
}

impl Default for CreateUiTextParams {
    fn default() -> Self {
        Self {
            name: default_text_name(),
            content: default_text_content(),
            position: None,
        }
    }
}

fn default_button_name() -> String {
    DEFAULT_BUTTON_NAME.to_string()
}

fn default_text_name() -> String {
    DEFAULT_TEXT_NAME.to_string()
}

fn default_text_content() -> String {
    DEFAULT_TEXT_CONTENT.to_string()
}
