//! Handler for the short URL creation endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::JsonOrForm;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL, or returns the existing mapping.
///
/// # Endpoint
///
/// `POST /api/shorturl/new`
///
/// # Request Body
///
/// JSON or urlencoded form:
///
/// ```json
/// { "url": "https://www.example.com/path?q=1" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "https://www.example.com/path?q=1", "short": "123456" }
/// ```
///
/// Submitting a URL that was already shortened returns the existing pair,
/// making creation idempotent.
///
/// # Errors
///
/// - 400 `{"error":"Invalid URL"}` if the URL fails validation
/// - 400 `{"error":"Hostname Error"}` if its hostname does not resolve
/// - 500 on store failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let mapping = state.shortener.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        url: mapping.url,
        short: mapping.short,
    }))
}
