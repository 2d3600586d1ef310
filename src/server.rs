//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! Creates the Axum router, applies the auth middleware to protected routes,
//! and starts the HTTP server. Configuration problems surface here as errors
//! so the process exits non-zero before it ever binds a socket.

use crate::auth::require_auth;
use crate::config::Config;
use crate::database::{create_pool, DbPool};
use crate::handlers;
use axum::{middleware, routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
}

impl axum::extract::FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Server configuration.
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3001")
    pub bind_address: String,
    /// Database migrations path
    pub migrations_path: &'static str,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3001".to_string(),
            migrations_path: "./migrations",
        }
    }
}

/// Build the application router.
///
/// `/register` and `/login` are public; `/wishlist` sits behind the bearer
/// token middleware.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/wishlist", post(handlers::add_wishlist_item))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Initialize and start the HTTP server.
///
/// # Errors
///
/// Returns an error if configuration loading or validation fails (missing
/// `JWT_SECRET` / `API_KEY`), the database connection or migrations fail, or
/// the listener cannot bind. All of these are fatal before serving begins.
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Loading configuration...");
    let config = Config::from_env()?;
    config.validate()?;

    // Ensure the data directory exists for SQLite
    if let Some(db_path) = config.database_url.strip_prefix("sqlite:") {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
                info!("Created database directory: {:?}", parent);
            }
        }
    }

    info!("Connecting to database...");
    let pool = create_pool(&config.database_url).await?;

    info!("Running database migrations from: {}", server_config.migrations_path);
    let migrator =
        sqlx::migrate::Migrator::new(std::path::Path::new(server_config.migrations_path)).await?;
    migrator.run(&pool).await?;
    info!("Migrations complete");

    let state = AppState { db: pool, config };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_address).await?;
    info!("Server ready: http://{}", server_config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
