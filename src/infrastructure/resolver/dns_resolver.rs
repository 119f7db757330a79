//! DNS-backed host resolver using the system resolver.

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::debug;

use super::service::{HostResolver, ResolveError};

/// Resolves hostnames through the operating system resolver.
///
/// Lookups are bounded by a timeout so that a slow resolver cannot stall the
/// request indefinitely.
pub struct DnsHostResolver {
    timeout: Duration,
}

impl DnsHostResolver {
    /// Creates a resolver with the given lookup timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for DnsHostResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        // The port is irrelevant for the existence check; 0 keeps
        // ToSocketAddrs happy without implying a service.
        let lookup = lookup_host((host, 0u16));

        let mut addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| ResolveError::Timeout {
                host: host.to_owned(),
            })?
            .map_err(|source| ResolveError::Lookup {
                host: host.to_owned(),
                source,
            })?;

        if addrs.next().is_none() {
            return Err(ResolveError::Empty {
                host: host.to_owned(),
            });
        }

        debug!(host, "Hostname resolved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_localhost() {
        let resolver = DnsHostResolver::new(Duration::from_secs(5));
        // "localhost" resolves without touching external DNS.
        assert!(resolver.resolve("localhost").await.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_reserved_invalid_tld_fails() {
        let resolver = DnsHostResolver::new(Duration::from_secs(5));
        let result = resolver.resolve("nonexistent-host.invalid").await;
        assert!(result.is_err());
    }
}
