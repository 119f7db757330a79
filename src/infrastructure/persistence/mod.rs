//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries. The schema is owned by the `migrations/` directory
//! and applied at startup.

pub mod pg_url_repository;

pub use pg_url_repository::PgUrlRepository;
