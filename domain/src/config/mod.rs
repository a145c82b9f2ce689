//! Configuration value objects shared by every layer.

pub mod validation;
pub mod variant;

pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use variant::Variant;
