//! Host resolver trait and error types.

use async_trait::async_trait;

/// Errors that can occur during hostname resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The system resolver returned an error for the host.
    #[error("lookup failed for {host}: {source}")]
    Lookup {
        host: String,
        source: std::io::Error,
    },

    /// The lookup did not complete within the configured timeout.
    #[error("lookup timed out for {host}")]
    Timeout { host: String },

    /// The lookup succeeded but produced no addresses.
    #[error("no addresses found for {host}")]
    Empty { host: String },
}

/// Trait for checking that a hostname resolves.
///
/// Used as an existence check on the host of a submitted URL before a mapping
/// is created; the resolved addresses themselves are discarded.
///
/// # Implementations
///
/// - [`crate::infrastructure::resolver::DnsHostResolver`] - system DNS resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves the given hostname, discarding the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the host does not resolve, resolves to
    /// nothing, or the lookup times out.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
