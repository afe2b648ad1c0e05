//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, dependency wiring and the Axum
//! server lifecycle.

use crate::application::services::{AuthService, ProductService, RoleService, UserService};
use crate::config::Config;
use crate::domain::repositories::{ProductRepository, RoleRepository, UserRepository};
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{
    PgProductRepository, PgRoleRepository, PgUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::password::PasswordHasher;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Opens the PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if no connection can be established.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Builds repositories and services over `pool` and assembles [`AppState`].
pub fn build_state(pool: PgPool, cache: Arc<dyn CacheService>, config: &Config) -> AppState {
    let pool = Arc::new(pool);
    let hasher = PasswordHasher::new(config.bcrypt_cost);

    let user_repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let role_repository: Arc<dyn RoleRepository> = Arc::new(PgRoleRepository::new(pool.clone()));
    let product_repository: Arc<dyn ProductRepository> =
        Arc::new(PgProductRepository::new(pool));

    AppState::new(
        Arc::new(UserService::new(
            user_repository.clone(),
            role_repository.clone(),
            hasher,
        )),
        Arc::new(RoleService::new(role_repository)),
        Arc::new(ProductService::new(product_repository)),
        Arc::new(AuthService::new(
            user_repository,
            hasher,
            config.jwt_secret.clone(),
            config.token_ttl_seconds,
        )),
        cache,
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Startup is sequential and every step is fatal:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis connection (only when configured, otherwise [`NullCache`])
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply database migrations")?;
    tracing::info!("Migrations applied");

    let cache: Arc<dyn CacheService> = match &config.redis_url {
        Some(redis_url) => {
            let redis = RedisCache::connect(redis_url)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        None => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    };

    let state = build_state(pool, cache, &config);

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = signal_or_pending(tokio::signal::ctrl_c(), "Ctrl-C");

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Resolves when `signal` fires. If the handler cannot be installed the
/// future never resolves, so a broken handler cannot trigger shutdown.
async fn signal_or_pending<F>(signal: F, name: &str)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "Failed to install {name} handler");
        std::future::pending::<()>().await;
    }
}
