//! Sandwich Ops Server — community collection operations platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sandops_core::config::AppConfig;
use sandops_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("SANDOPS_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Sandwich Ops v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = sandops_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    sandops_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Step 2: Initialize repositories ──────────────────────────
    let collection_repo = Arc::new(
        sandops_database::repositories::collection::CollectionRepository::new(db_pool.clone()),
    );
    let host_repo = Arc::new(sandops_database::repositories::host::HostRepository::new(
        db_pool.clone(),
    ));
    let project_repo = Arc::new(
        sandops_database::repositories::project::ProjectRepository::new(db_pool.clone()),
    );

    // ── Step 3: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let weekly_report_service = Arc::new(sandops_service::report::WeeklyReportService::new(
        Arc::clone(&collection_repo),
        Arc::clone(&host_repo),
        config.reporting.clone(),
    ));
    let report_generator = Arc::new(sandops_service::report::ReportGenerator::new(
        Arc::clone(&collection_repo),
        Arc::clone(&host_repo),
        Arc::clone(&project_repo),
        config.reporting.clone(),
    ));
    let monitoring_service = Arc::new(sandops_service::monitor::MonitoringService::new(
        Arc::clone(&collection_repo),
        Arc::clone(&host_repo),
    ));
    tracing::info!("Services initialized");

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = sandops_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool,
        collection_repo,
        host_repo,
        project_repo,
        weekly_report_service,
        report_generator,
        monitoring_service,
    };

    let app = sandops_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Sandwich Ops server listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Sandwich Ops server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
}
