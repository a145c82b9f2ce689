//! Conversation settings from TOML (`[conversation]` section)

use colloquy_domain::{Topic, Variant};
use serde::{Deserialize, Serialize};

/// Raw run settings. Unset values fall back to the variant's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// Which defaults to start from ("local" or "hosted")
    pub variant: Variant,
    /// Subject handed to the first speaker
    pub topic: Option<String>,
    /// Turn budget (variant default when unset)
    pub max_turns: Option<usize>,
    /// Delay between turns in streaming mode, in milliseconds
    pub pacing_ms: u64,
    /// Token and cost accounting (variant default when unset)
    pub accounting: Option<bool>,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            topic: None,
            max_turns: None,
            pacing_ms: 500,
            accounting: None,
        }
    }
}

impl FileConversationConfig {
    /// Configured topic, or the built-in one when unset or blank.
    pub fn topic(&self) -> Topic {
        self.topic
            .as_deref()
            .and_then(Topic::try_new)
            .unwrap_or_default()
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
            .unwrap_or_else(|| self.variant.default_max_turns())
    }

    pub fn accounting(&self) -> bool {
        self.accounting
            .unwrap_or_else(|| self.variant.accounting_by_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_domain::DEFAULT_TOPIC;

    #[test]
    fn test_variant_defaults_apply() {
        let local = FileConversationConfig::default();
        assert_eq!(local.max_turns(), 20);
        assert!(!local.accounting());

        let hosted: FileConversationConfig = toml::from_str(r#"variant = "hosted""#).unwrap();
        assert_eq!(hosted.max_turns(), 6);
        assert!(hosted.accounting());
    }

    #[test]
    fn test_explicit_values_win() {
        let config: FileConversationConfig = toml::from_str(
            r#"
variant = "hosted"
max_turns = 2
accounting = false
pacing_ms = 0
"#,
        )
        .unwrap();
        assert_eq!(config.max_turns(), 2);
        assert!(!config.accounting());
        assert_eq!(config.pacing_ms, 0);
    }

    #[test]
    fn test_blank_topic_uses_default() {
        let config = FileConversationConfig {
            topic: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.topic().content(), DEFAULT_TOPIC);
    }
}
