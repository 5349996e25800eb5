//! Database bootstrap command

use anyhow::{Context, Result};
use clap::Parser;
use products_server::db::{clear_table, create_pool, ensure_schema};
use products_server::DatabaseConfig;

use super::DbArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Delete all products and restart ids at 1
    #[arg(long)]
    pub reset: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Create the products table, optionally clearing it
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db_config = DatabaseConfig::from(args.db);
    let pool = create_pool(&db_config)
        .await
        .with_context(|| format!("Failed to connect to {}", db_config.display_target()))?;

    let result = async {
        ensure_schema(&pool).await.context("Failed to create products table")?;
        if args.reset {
            clear_table(&pool).await.context("Failed to clear products table")?;
            tracing::info!("Products table cleared");
        }
        Ok::<_, anyhow::Error>(())
    }
    .await;

    pool.close().await;
    result?;

    tracing::info!("Database ready");
    Ok(())
}
