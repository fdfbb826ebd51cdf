use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::database::MarkRepository;
use crate::database::mysql::MySqlRepository;
use crate::features::health::health_handler;
use crate::features::students::students_router;
use crate::features::submarks::sub_marks_router;

pub mod config;
mod database;
mod domain;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn MarkRepository>,
    pub config: Arc<ServiceConfig>,
    pub started_at: Instant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // console logging, overridable through RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load centralized config
    let config = ServiceConfig::from_env();
    let shared_config = Arc::new(config.clone());

    let connect_options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
        .port(config.db_port);

    // bounded pool shared by every request; acquisition blocks up to
    // acquire_timeout and then fails instead of hanging
    let pool = match MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(connect_options)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            panic!(
                "Failed to create pool on {}:{}: {}",
                config.db_host, config.db_port, e
            );
        }
    };

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations.");

    let repo: Arc<dyn MarkRepository> = Arc::new(MySqlRepository::new(pool.clone()));

    // startup connectivity probe; the pool recovers on its own, so a failure
    // here is logged rather than fatal
    match repo.ping().await {
        Ok(()) => tracing::info!("connected to MySQL database"),
        Err(err) => tracing::error!(?err, "database connection failed"),
    }

    let app_state = AppState {
        repo: repo.clone(),
        config: shared_config.clone(),
        started_at: Instant::now(),
    };

    let app = Router::new()
        .merge(students_router())
        .merge(sub_marks_router())
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.listen_port)).await?;
    tracing::info!("server listening on http://0.0.0.0:{}", config.listen_port);
    tracing::info!("health check: /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // release every pooled connection before exiting
    pool.close().await;

    Ok(())
}

// unknown routes get a JSON 404 instead of an empty body
async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

// resolves once the OS asks the process to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for shutdown signal");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
