//! Application lifecycle and Axum server setup
//!
//! `App` owns the product store and, when PostgreSQL-backed, the pool:
//! - `initialize` opens the pool and ensures the schema
//! - `serve` blocks until Ctrl+C/SIGTERM, then closes the pool

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::DatabaseConfig;
use crate::db::{create_pool, ensure_schema, MemoryStore, ProductRepo, ProductStore};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8010)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost origins only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8010)),
            cors_permissive: false,
        }
    }
}

/// Shared application state, injected into handlers via `State`
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}

/// The products service: store plus router
pub struct App {
    state: AppState,
    pool: Option<PgPool>,
}

impl App {
    /// Connect to PostgreSQL and make sure the `products` table exists.
    ///
    /// The pool is closed again if schema setup fails.
    pub async fn initialize(config: &DatabaseConfig) -> Result<Self, ServerError> {
        tracing::info!(target_db = %config.display_target(), "Opening database");
        let pool = create_pool(config).await?;

        if let Err(e) = ensure_schema(&pool).await {
            pool.close().await;
            return Err(e.into());
        }

        let repo = ProductRepo::new(pool.clone());
        Ok(Self {
            state: AppState::new(Arc::new(repo)),
            pool: Some(pool),
        })
    }

    /// Service backed by a fresh `MemoryStore`; nothing persists.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Service backed by any store.
    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self {
            state: AppState::new(store),
            pool: None,
        }
    }

    /// The PostgreSQL pool, if this app was built by `initialize`.
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self, config: &ServerConfig) -> Router {
        build_router(self.state.clone(), config.cors_permissive)
    }

    /// Bind and serve until a shutdown signal arrives.
    ///
    /// The pool is closed on every exit path, including bind failure.
    pub async fn serve(self, config: ServerConfig) -> Result<(), ServerError> {
        let app = self.router(&config);
        let result = run(app, config.bind_addr).await;
        self.close().await;
        result
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(self) {
        if let Some(pool) = self.pool {
            pool.close().await;
            tracing::info!("Database pool closed");
        }
    }
}

async fn run(app: Router, bind_addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let cors = if cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
                origin.to_str().map(is_local_origin).unwrap_or(false)
            }))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::products::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// True for `http(s)://localhost[:port]` and `http(s)://127.0.0.1[:port]`.
fn is_local_origin(origin: &str) -> bool {
    let Some(rest) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };

    let host = rest.split(':').next().unwrap_or(rest);
    host == "localhost" || host == "127.0.0.1"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
