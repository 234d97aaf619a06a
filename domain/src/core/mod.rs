//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: available Gemini models on the agent runtime
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
