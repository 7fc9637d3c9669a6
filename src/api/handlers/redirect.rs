//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code in the store (atomic click increment)
/// 2. Return 307 Temporary Redirect to the original URL
///
/// Only this endpoint increments the click counter; the stats endpoint is a
/// pure read.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    debug!(code = %link.code, clicks = link.clicks, "redirecting");

    Ok(Redirect::temporary(&link.long_url))
}
