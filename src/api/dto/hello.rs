//! DTO for the diagnostic greeting endpoint.

use serde::Serialize;

/// Fixed greeting used for liveness sanity-checking.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: &'static str,
}
