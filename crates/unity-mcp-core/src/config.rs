//! Configuration types for Unity MCP Server.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::Error;

/// Server configuration loaded from YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Server settings
    pub server: ServerSettings,
    /// Unity editor connection settings
    pub unity: UnitySettings,
}

impl ServerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: ServerConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.server.transport != "stdio" {
            return Err(Error::Config(format!(
                "unsupported transport '{}' (only 'stdio' is available)",
                self.server.transport
            )));
        }

        if self.unity.host.trim().is_empty() {
            return Err(Error::Config("unity.host cannot be empty".to_string()));
        }

        if self.unity.port == 0 {
            return Err(Error::Config("unity.port must be > 0".to_string()));
        }

        if self.unity.timeout_ms == 0 {
            return Err(Error::Config("unity.timeout_ms must be > 0".to_string()));
        }

        if self.unity.max_response_bytes == 0 {
            return Err(Error::Config(
                "unity.max_response_bytes must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Transport type (stdio)
    pub transport: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            transport: "stdio".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Where and how to reach the Unity editor bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitySettings {
    /// Editor bridge host
    pub host: String,
    /// Editor bridge TCP port
    pub port: u16,
    /// Connect and I/O timeout in milliseconds
    pub timeout_ms: u64,
    /// Upper bound on a single response
    pub max_response_bytes: usize,
}

impl Default for UnitySettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6400,
            timeout_ms: 15_000,
            max_response_bytes: 10 * 1024 * 1024,
        }
    }
}

impl UnitySettings {
    /// `host:port` address string.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.server.transport, "stdio");
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.unity.host, "localhost");
        assert_eq!(config.unity.port, 6400);
        assert_eq!(config.unity.address(), "localhost:6400");
        assert_eq!(config.unity.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_config_validation() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = ServerConfig::default();
        config.unity.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = ServerConfig::default();
        config.unity.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_host() {
        let mut config = ServerConfig::default();
        config.unity.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unsupported_transport() {
        let mut config = ServerConfig::default();
        config.server.transport = "sse".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported transport 'sse'"));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
server:
  transport: stdio
  log_level: debug

unity:
  host: 192.168.1.20
  port: 6500
  timeout_ms: 3000
"#;

        let config = ServerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.server.log_level, "debug");
        assert_eq!(config.unity.host, "192.168.1.20");
        assert_eq!(config.unity.port, 6500);
        assert_eq!(config.unity.timeout_ms, 3000);
        assert_eq!(config.unity.max_response_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ServerConfig::from_yaml("unity:\n  port: 7000\n").unwrap();
        assert_eq!(config.unity.port, 7000);
        assert_eq!(config.unity.host, "localhost");
        assert_eq!(config.server.transport, "stdio");
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let result = ServerConfig::from_yaml("unity:\n  port: not-a-number\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = ServerConfig::from_file("/nonexistent/unity-mcp.yaml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
