//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Failure modes of [`UrlRepository::insert`].
///
/// The store's unique constraints are the only synchronization primitive in
/// the system, so the insert path must distinguish which constraint fired:
/// a duplicate `url` means a concurrent request won the creation race, while
/// a duplicate `short` means the generated code collided with an unrelated
/// mapping.
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// A mapping for the same original URL already exists.
    #[error("a mapping for this url already exists")]
    DuplicateUrl,

    /// The generated short code is already taken by another mapping.
    #[error("this short code is already taken")]
    DuplicateShort,

    /// Any other database failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Repository interface for URL mappings.
///
/// Mappings are immutable: there is no update or delete operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DuplicateUrl`] or [`InsertError::DuplicateShort`]
    /// on unique-constraint violations, [`InsertError::Database`] otherwise.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, InsertError>;

    /// Finds a mapping by its original URL (exact, byte-for-byte match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_short(&self, short: &str) -> Result<Option<UrlMapping>, AppError>;
}
