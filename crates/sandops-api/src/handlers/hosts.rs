//! Host directory handlers.

use axum::Json;
use axum::extract::{Query, State};

use sandops_entity::host::Host;

use crate::dto::request::HostListQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hosts
pub async fn list_hosts(
    State(state): State<AppState>,
    Query(query): Query<HostListQuery>,
) -> Result<Json<ApiResponse<Vec<Host>>>, ApiError> {
    let hosts = match query.status {
        Some(status) => state.host_repo.find_by_status(status).await?,
        None => state.host_repo.find_all().await?,
    };
    Ok(Json(ApiResponse::ok(hosts)))
}
