//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use account::{AccountConfig, InMemoryUserRepository, PgUserRepository, account_router};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 31113;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,account=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let account_config = AccountConfig::from_env();
    tracing::info!(
        duplicate_check = ?account_config.duplicate_check,
        dispatch = ?account_config.dispatch,
        id_strategy = ?account_config.id_strategy,
        "Account configuration loaded"
    );

    // Repository: PostgreSQL when configured, in-memory otherwise
    let account = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;
            tracing::info!("Connected to database");
            account_router(PgUserRepository::new(pool), account_config)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory");
            account_router(InMemoryUserRepository::new(), account_config)
        }
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api/account", account)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = match env::var("API_PORT") {
        Ok(raw) => raw.parse::<u16>()?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
