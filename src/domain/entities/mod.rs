//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation uses a
//! separate `New*` struct, leaving store-assigned fields (`id`, `created_at`)
//! to the repository.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
