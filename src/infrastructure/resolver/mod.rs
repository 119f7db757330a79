//! Hostname resolution for submitted URLs.
//!
//! Provides a [`HostResolver`] trait with a DNS-backed implementation:
//! - [`DnsHostResolver`] - system resolver via tokio, with a bounded timeout

mod dns_resolver;
mod service;

pub use dns_resolver::DnsHostResolver;
pub use service::{HostResolver, ResolveError};

#[cfg(test)]
pub use service::MockHostResolver;
