//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No participants configured for the conversation")]
    NoParticipants,

    #[error("Duplicate participant name: {0}")]
    DuplicateParticipant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::DuplicateParticipant("Maya".to_string()).to_string(),
            "Duplicate participant name: Maya"
        );
    }
}
