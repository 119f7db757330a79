//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Submitted-URL validation and host extraction

pub mod code_generator;
pub mod url_validator;
