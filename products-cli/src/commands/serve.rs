//! HTTP server command
//!
//! Runs the products API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use products_server::{App, DatabaseConfig, ServerConfig};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8010")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep products in process memory instead of PostgreSQL
    #[arg(long)]
    pub in_memory: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let app = if args.in_memory {
        tracing::warn!("Using in-memory store - data is lost on exit");
        App::in_memory()
    } else {
        let db_config = DatabaseConfig::from(args.db);
        App::initialize(&db_config)
            .await
            .with_context(|| format!("Failed to open database {}", db_config.display_target()))?
    };

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting products server on {}", config.bind_addr);

    // Blocks until shutdown
    app.serve(config).await.context("Server error")?;

    Ok(())
}
