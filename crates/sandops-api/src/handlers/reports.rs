//! Report handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;

use sandops_core::error::AppError;
use sandops_entity::report::weekly::WeeklyReport;
use sandops_service::monitor::SubmissionStatus;
use sandops_service::report::pdf::render_weekly_pdf;
use sandops_service::report::{ReportConfig, ReportFormat};

use crate::dto::request::WeeklyImpactRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/reports/weekly-impact
pub async fn weekly_impact(
    State(state): State<AppState>,
    Json(request): Json<WeeklyImpactRequest>,
) -> Result<Json<ApiResponse<WeeklyReport>>, ApiError> {
    let report = state
        .weekly_report_service
        .generate(request.week_ending_date)
        .await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// GET /api/reports/weekly-impact/download/{week_ending}
pub async fn download_weekly_pdf(
    State(state): State<AppState>,
    Path(week_ending): Path<String>,
) -> Result<Response, ApiError> {
    let week_ending_date = NaiveDate::parse_from_str(&week_ending, "%Y-%m-%d").map_err(|_| {
        AppError::validation(format!(
            "'{week_ending}' is not a valid week-ending date (expected YYYY-MM-DD)"
        ))
    })?;

    let report = state
        .weekly_report_service
        .generate(Some(week_ending_date))
        .await?;
    let bytes = render_weekly_pdf(&report)?;

    let filename = format!("weekly-impact-report-{week_ending_date}.pdf");
    Ok(attachment_response("application/pdf", &filename, bytes)?)
}

/// POST /api/reports/generate
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<ReportConfig>,
) -> Result<Response, ApiError> {
    match request.format {
        ReportFormat::Json => {
            let report = state.report_generator.generate(&request).await?;
            Ok(Json(ApiResponse::ok(report)).into_response())
        }
        ReportFormat::Csv => {
            let bytes = state.report_generator.generate_csv(&request).await?;
            let filename = format!("{}-report.csv", request.report_type.as_str());
            Ok(attachment_response("text/csv", &filename, bytes)?)
        }
        ReportFormat::Pdf => Err(AppError::validation(
            "PDF output is only available for the weekly impact report",
        )
        .into()),
    }
}

/// GET /api/reports/weekly-monitoring
pub async fn weekly_monitoring(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SubmissionStatus>>>, ApiError> {
    let statuses = state.monitoring_service.check_weekly_submissions().await?;
    Ok(Json(ApiResponse::ok(statuses)))
}

/// Binary response with a content-disposition attachment filename.
fn attachment_response(
    content_type: &'static str,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<Response, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
            .map_err(|e| AppError::internal(format!("Invalid attachment filename: {e}")))?,
    );
    Ok((headers, bytes).into_response())
}
