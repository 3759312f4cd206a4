use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

mod api;
mod config;

use config::{ServerConfig, ServerMode};
use homegenie_mcp::tools;
use homegenie_mcp::McpServer;

#[derive(Parser, Debug)]
#[command(name = "homegenie")]
#[command(about = "HomeGenie MCP Server - weather and energy price tools", long_about = None)]
struct Args {
    /// Host to bind in HTTP mode
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on in HTTP mode
    #[arg(short, long, env = "PORT", default_value = "8000")]
    port: u16,

    /// Force the HTTP server (otherwise selected when HOST is 0.0.0.0)
    #[arg(long, env = "PRODUCTION")]
    production: bool,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr: stdout is the protocol channel in stdio mode.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ServerConfig {
        mode: ServerMode::resolve(&args.host, args.production),
        host: args.host,
        port: args.port,
    };

    if let Err(err) = run(config).await {
        tracing::error!("server error: {:#}", err);
        eprintln!("❌ Error starting server: {:#}", err);
        eprintln!("💡 For production, set the HOST=0.0.0.0 environment variable");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<()> {
    tracing::info!("HomeGenie MCP Server starting...");

    let registry = tools::default_registry();
    tracing::info!("available tools: {}", registry.tool_names().join(", "));

    match config.mode {
        ServerMode::Http => {
            tracing::info!("starting HTTP server on {}", config.bind_addr());
            api::serve(&config, Arc::new(registry)).await
        }
        ServerMode::Stdio => McpServer::new(registry).run().await,
    }
}
