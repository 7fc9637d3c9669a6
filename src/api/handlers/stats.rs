//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Response
///
/// Returns link metadata and the click counter. Viewing stats is a pure
/// read: it never increments `clicks`, no matter how often it is called.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.peek(&code).await?;

    let short_url = state
        .link_service
        .get_short_url(&state.base_url, &link.code);

    Ok(Json(StatsResponse {
        code: link.code,
        long_url: link.long_url,
        short_url,
        created_at: link.created_at,
        clicks: link.clicks,
    }))
}
