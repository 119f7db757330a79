//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository and
//! resolver calls, validation, and business rules, providing a clean API for
//! HTTP handlers.

pub mod services;
