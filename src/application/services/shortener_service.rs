//! URL mapping creation and resolution service.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{InsertError, UrlRepository};
use crate::error::AppError;
use crate::infrastructure::resolver::HostResolver;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Insert attempts before giving up on short code generation.
const MAX_INSERT_ATTEMPTS: usize = 10;

/// Service for creating and resolving short URL mappings.
///
/// Handles URL validation, hostname resolution, deduplication, and the
/// duplicate-insert race: two near-simultaneous creations of the same URL are
/// resolved by letting one insert win and having the loser re-read the
/// winner's row.
pub struct ShortenerService {
    urls: Arc<dyn UrlRepository>,
    resolver: Arc<dyn HostResolver>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(urls: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self { urls, resolver }
    }

    /// Creates a mapping for `raw_url`, or returns the existing one.
    ///
    /// The submitted URL is stored byte-for-byte; deduplication is an exact
    /// string match with no normalization of trailing slashes, scheme case,
    /// or query order.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if the URL fails validation
    /// - [`AppError::HostnameError`] if its hostname does not resolve
    /// - [`AppError::CodeExhausted`] if every generated code collided
    /// - [`AppError::Database`] on any other store failure
    pub async fn shorten(&self, raw_url: &str) -> Result<UrlMapping, AppError> {
        let host = validate_url(raw_url).map_err(|e| {
            debug!(url = raw_url, error = %e, "Rejected invalid URL");
            AppError::InvalidUrl
        })?;

        self.resolver.resolve(&host).await.map_err(|e| {
            debug!(host, error = %e, "Hostname did not resolve");
            AppError::HostnameError
        })?;

        if let Some(existing) = self.urls.find_by_url(raw_url).await? {
            return Ok(existing);
        }

        for _ in 0..MAX_INSERT_ATTEMPTS {
            let new_mapping = NewUrlMapping {
                url: raw_url.to_owned(),
                short: generate_code(),
            };

            match self.urls.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(InsertError::DuplicateUrl) => {
                    // A concurrent request created the mapping between our
                    // existence check and the insert; return the winner.
                    debug!(url = raw_url, "Lost creation race, re-reading winner");
                    if let Some(existing) = self.urls.find_by_url(raw_url).await? {
                        return Ok(existing);
                    }
                    // Winner not visible yet; fall through and try again.
                }
                Err(InsertError::DuplicateShort) => {
                    warn!(url = raw_url, "Short code collision, retrying");
                }
                Err(InsertError::Database(e)) => return Err(e.into()),
            }
        }

        Err(AppError::CodeExhausted)
    }

    /// Resolves a short code to its stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping matches the code,
    /// [`AppError::Database`] on store failures.
    pub async fn resolve(&self, short: &str) -> Result<UrlMapping, AppError> {
        self.urls
            .find_by_short(short)
            .await?
            .ok_or(AppError::NotFound)
    }
}
