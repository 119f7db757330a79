//! Mapping entity between an original URL and its short code.

use chrono::{DateTime, Utc};

/// A stored URL-to-short-code mapping.
///
/// Both `url` and `short` are unique across all mappings; once created a
/// mapping is never updated or deleted. The `url` field holds the submitted
/// URL byte-for-byte, with no normalization applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub url: String,
    pub short: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub url: String,
    pub short: String,
}
