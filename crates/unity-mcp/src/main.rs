use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use rmcp::{transport::stdio, ServiceExt};
use unity_mcp::UnityMcpServer;
use unity_mcp_bridge::{EditorConnection, TcpEditorConnection};
use unity_mcp_core::ServerConfig;

/// Command line options.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
            "--host" => cli.host = Some(value("--host")?),
            "--port" => {
                let port = value("--port")?;
                cli.port = Some(
                    port.parse()
                        .with_context(|| format!("invalid --port value '{port}'"))?,
                );
            }
            other => anyhow::bail!("unknown argument '{other}'"),
        }
    }

    Ok(cli)
}

fn load_config(cli: &CliArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(host) = &cli.host {
        config.unity.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.unity.port = port;
    }
    config.validate()?;

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    let config = load_config(&cli)?;

    // Initialize logging; stdout belongs to the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "Unity MCP Server v{} starting (editor at {})...",
        env!("CARGO_PKG_VERSION"),
        config.unity.address()
    );

    let connection = Arc::new(TcpEditorConnection::new(config.unity.clone()));

    match connection.ping().await {
        Ok(()) => tracing::info!("Unity editor reachable at {}", config.unity.address()),
        Err(e) => tracing::warn!(
            "Unity editor not reachable at {} ({}); tools will fail until it is running",
            config.unity.address(),
            e
        ),
    }

    let server = UnityMcpServer::new(connection);

    tracing::info!("Server initialized, starting stdio transport...");

    // Serve the MCP server over stdio
    let service = server.serve(stdio()).await.map_err(|e| {
        tracing::error!("Error starting server: {}", e);
        e
    })?;

    tracing::info!("Unity MCP Server running on stdio");

    // Wait for the service to complete
    service.waiting().await?;

    tracing::info!("Unity MCP Server shutting down");

    Ok(())
}
