//! Topic value object

use serde::{Deserialize, Serialize};

/// Topic used when nobody configures one.
pub const DEFAULT_TOPIC: &str =
    "Let's start learning Python from the very beginning. Show us the first thing every programmer learns!";

/// The subject the first speaker is asked to introduce (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a new topic
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Topic cannot be empty");
        Self { content }
    }

    /// Try to create a new topic, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for Topic {
    fn default() -> Self {
        Self {
            content: DEFAULT_TOPIC.to_string(),
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Topic {
    fn from(s: &str) -> Self {
        Topic::new(s)
    }
}

impl From<String> for Topic {
    fn from(s: String) -> Self {
        Topic::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let t = Topic::new("Ownership in Rust");
        assert_eq!(t.content(), "Ownership in Rust");
    }

    #[test]
    fn test_default_topic() {
        assert_eq!(Topic::default().content(), DEFAULT_TOPIC);
    }

    #[test]
    #[should_panic]
    fn test_empty_topic_panics() {
        Topic::new("  ");
    }

    #[test]
    fn test_try_new() {
        assert!(Topic::try_new("").is_none());
        assert!(Topic::try_new("\n\t").is_none());
        assert!(Topic::try_new("Closures").is_some());
    }
}
