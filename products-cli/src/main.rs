//! products CLI - run and administer the products HTTP service
//!
//! Subcommands:
//! - `serve`: run the HTTP API (PostgreSQL or in-memory store)
//! - `init-db`: create the `products` table, optionally clearing it

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(name = "products", version, about = "HTTP CRUD service for products")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),

    /// Create the products table if missing
    InitDb(commands::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }

    Ok(())
}
