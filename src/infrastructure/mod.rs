//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and hostname resolution.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`resolver`] - DNS hostname resolution

pub mod persistence;
pub mod resolver;
