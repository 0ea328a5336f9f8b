//! Collection listing handlers.

use axum::Json;
use axum::extract::{Query, State};

use sandops_core::error::AppError;
use sandops_entity::collection::SandwichCollection;

use crate::dto::request::CollectionListQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/collections
pub async fn list_collections(
    State(state): State<AppState>,
    Query(query): Query<CollectionListQuery>,
) -> Result<Json<ApiResponse<Vec<SandwichCollection>>>, ApiError> {
    let collections = match (query.start_date, query.end_date) {
        (Some(start), Some(end)) => {
            if start > end {
                return Err(AppError::validation(format!(
                    "start_date ({start}) is after end_date ({end})"
                ))
                .into());
            }
            state.collection_repo.find_between(start, end).await?
        }
        (None, None) => state.collection_repo.find_all().await?,
        _ => {
            return Err(AppError::validation(
                "start_date and end_date must be supplied together",
            )
            .into());
        }
    };
    Ok(Json(ApiResponse::ok(collections)))
}
