//! Handler for the diagnostic greeting endpoint.

use axum::Json;

use crate::api::dto::hello::Greeting;

/// Returns a fixed JSON greeting.
///
/// # Endpoint
///
/// `GET /api/hello`
///
/// Used only for liveness sanity-checking; always responds
/// `{"greeting":"hello API"}`.
pub async fn hello_handler() -> Json<Greeting> {
    Json(Greeting {
        greeting: "hello API",
    })
}
