//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: model identifiers (hosted catalog, local tags, custom)
//! - [`topic::Topic`]: the subject the conversation opens with
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod topic;
