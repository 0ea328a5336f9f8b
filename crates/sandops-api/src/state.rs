//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use sandops_core::config::AppConfig;
use sandops_database::repositories::collection::CollectionRepository;
use sandops_database::repositories::host::HostRepository;
use sandops_database::repositories::project::ProjectRepository;
use sandops_service::monitor::MonitoringService;
use sandops_service::report::{ReportGenerator, WeeklyReportService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Repositories ─────────────────────────────────────────
    /// Collection repository
    pub collection_repo: Arc<CollectionRepository>,
    /// Host repository
    pub host_repo: Arc<HostRepository>,
    /// Project repository
    pub project_repo: Arc<ProjectRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Weekly impact report service
    pub weekly_report_service: Arc<WeeklyReportService>,
    /// Community report generator
    pub report_generator: Arc<ReportGenerator>,
    /// Weekly submission monitor
    pub monitoring_service: Arc<MonitoringService>,
}
