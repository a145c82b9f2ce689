//! Structured configuration issues.
//!
//! Loaders collect every problem they find instead of stopping at the
//! first one; callers decide which severities are fatal.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// No participants although turns were requested.
    NoParticipants,
    /// Two participants share a display name.
    DuplicateParticipant { name: String },
    /// A participant has an empty model id.
    EmptyModel { participant: String },
    /// A participant names a provider that does not exist.
    UnknownProvider { participant: String, value: String },
    /// Hosted participants are configured but no credential was found.
    MissingCredential,
    /// A sampling value is outside its usual range.
    SamplingOutOfRange { participant: String, field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Check whether any issue in the slice is fatal.
    pub fn any_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
