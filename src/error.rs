//! Application error type and HTTP response mapping.
//!
//! Every failure path returns a structured JSON body of the form
//! `{"error": "<message>"}` with an appropriate status code. Database error
//! details are logged but never leaked to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application-level errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL failed validation.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The URL's hostname did not resolve.
    #[error("Hostname Error")]
    HostnameError,

    /// No mapping exists for the requested short code.
    #[error("Short URL not found")]
    NotFound,

    /// A database operation failed.
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// The collision-retry budget for short code generation was exhausted.
    #[error("Failed to allocate a short code")]
    CodeExhausted,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidUrl | AppError::HostnameError => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(source) => {
                tracing::error!(error = %source, "Database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::CodeExhausted => {
                tracing::error!("Short code generation exhausted its retry budget");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = read_body(response);
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn read_body(response: Response) -> Vec<u8> {
        use axum::body::to_bytes;
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(async { to_bytes(response.into_body(), usize::MAX).await.unwrap() })
            .to_vec()
    }

    #[test]
    fn test_invalid_url_is_bad_request() {
        let (status, body) = response_parts(AppError::InvalidUrl);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid URL");
    }

    #[test]
    fn test_hostname_error_is_bad_request() {
        let (status, body) = response_parts(AppError::HostnameError);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Hostname Error");
    }

    #[test]
    fn test_not_found_status() {
        let (status, body) = response_parts(AppError::NotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Short URL not found");
    }

    #[test]
    fn test_database_error_hides_details() {
        let (status, body) = response_parts(AppError::Database(sqlx::Error::PoolClosed));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database error");
    }
}
