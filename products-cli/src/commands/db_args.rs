//! Database connection flags shared by every command

use clap::Args;
use products_server::DatabaseConfig;

/// Connection flags; each falls back to its environment variable
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Full connection string (overrides the discrete flags below)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USERNAME", default_value = "postgres")]
    pub db_username: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "products")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = products_server::config::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl From<DbArgs> for DatabaseConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            url: args.database_url.filter(|u| !u.is_empty()),
            host: args.db_host,
            port: args.db_port,
            username: args.db_username,
            password: args.db_password,
            database: args.db_name,
            max_connections: args.max_connections,
        }
    }
}
