//! PostgreSQL implementation of the URL mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{InsertError, UrlRepository};
use crate::error::AppError;

/// Unique constraint name for the `url` column, from
/// `migrations/0001_create_urls.sql`. A unique violation naming any other
/// constraint on this table is the `short` column's.
const URL_CONSTRAINT: &str = "urls_url_key";

/// Row shape shared by all queries against the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    url: String,
    short: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlMapping {
    fn from(row: UrlRow) -> Self {
        Self {
            id: row.id,
            url: row.url,
            short: row.short,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for URL mapping storage and retrieval.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, InsertError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (url, short)
            VALUES ($1, $2)
            RETURNING id, url, short, created_at
            "#,
        )
        .bind(&new_mapping.url)
        .bind(&new_mapping.short)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, url, short, created_at
            FROM urls
            WHERE url = $1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, url, short, created_at
            FROM urls
            WHERE short = $1
            "#,
        )
        .bind(short)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}

/// Maps a unique-constraint violation to the matching [`InsertError`] variant.
fn map_insert_error(e: sqlx::Error) -> InsertError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(URL_CONSTRAINT) => InsertError::DuplicateUrl,
                _ => InsertError::DuplicateShort,
            };
        }
    }

    InsertError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_insert_error_passes_through_other_errors() {
        let mapped = map_insert_error(sqlx::Error::PoolClosed);
        assert!(matches!(mapped, InsertError::Database(_)));
    }

    #[test]
    fn test_url_row_conversion() {
        let now = Utc::now();
        let row = UrlRow {
            id: 7,
            url: "https://www.example.com".to_string(),
            short: "123456".to_string(),
            created_at: now,
        };

        let mapping: UrlMapping = row.into();

        assert_eq!(mapping.id, 7);
        assert_eq!(mapping.url, "https://www.example.com");
        assert_eq!(mapping.short, "123456");
        assert_eq!(mapping.created_at, now);
    }
}
