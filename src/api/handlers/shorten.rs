//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns) the short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "Ab3dE9",
///   "long_url": "https://example.com/a",
///   "short_url": "http://localhost:3000/Ab3dE9"
/// }
/// ```
///
/// Submitting a URL that was already shortened returns the existing code;
/// the operation is idempotent.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is not a valid absolute HTTP(S) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;

    let short_url = state
        .link_service
        .get_short_url(&state.base_url, &link.code);

    Ok(Json(ShortenResponse {
        code: link.code,
        long_url: link.long_url,
        short_url,
    }))
}
