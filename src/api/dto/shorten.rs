//! DTOs for the short URL creation endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Accepted as either a JSON or urlencoded form body.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,
}

/// The created (or pre-existing) mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The stored original URL, byte-identical to what was submitted.
    pub url: String,
    /// The short code, as its canonical decimal string.
    pub short: String,
}
