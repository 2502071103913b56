//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bankapp_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BANKAPP_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// SQLite database file (created if missing)
    #[arg(long, short = 'd', env = "BANKAPP_DATABASE", default_value = "bank.db")]
    pub database: PathBuf,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting bankapp server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        database_path: args.database,
    };

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}
