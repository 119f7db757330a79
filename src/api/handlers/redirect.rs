//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short}`
///
/// # Errors
///
/// Returns 404 with a JSON body when no mapping exists for the code — never a
/// crash — and 500 on store failures.
pub async fn redirect_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.shortener.resolve(&short).await?;
    Ok(Redirect::temporary(&mapping.url))
}
