//! Shared application state injected into HTTP handlers.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::application::services::ShortenerService;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::PgUrlRepository;
use crate::infrastructure::resolver::{DnsHostResolver, HostResolver};

/// Shared application state.
///
/// Cheap to clone; handlers receive it via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    /// Builds production state over a PostgreSQL pool and the system DNS
    /// resolver.
    pub fn new(pool: PgPool, dns_timeout: Duration) -> Self {
        let urls = Arc::new(PgUrlRepository::new(Arc::new(pool)));
        let resolver = Arc::new(DnsHostResolver::new(dns_timeout));
        Self::from_parts(urls, resolver)
    }

    /// Builds state from explicit collaborators; used by tests to inject
    /// mocks.
    pub fn from_parts(urls: Arc<dyn UrlRepository>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(urls, resolver)),
        }
    }
}
