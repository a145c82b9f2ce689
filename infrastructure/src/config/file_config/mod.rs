//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod conversation;
mod output;
mod participants;
mod providers;

pub use conversation::FileConversationConfig;
pub use output::FileOutputConfig;
pub use participants::FileParticipantConfig;
pub use providers::{FileHostedProviderConfig, FileLocalProviderConfig, FileProvidersConfig};

use colloquy_application::ConversationParams;
use colloquy_domain::{
    ConfigIssue, ConfigIssueCode, ModelPrice, Participant, PriceTable, ProviderKind, Severity,
    Variant, presets,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Fatal configuration problems, reported all at once.
#[derive(Debug, Error)]
#[error("invalid configuration:\n  {}", list_messages(.0))]
pub struct ConfigValidationError(pub Vec<ConfigIssue>);

fn list_messages(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("\n  ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Run settings
    pub conversation: FileConversationConfig,
    /// Endpoint settings per provider kind
    pub providers: FileProvidersConfig,
    /// Explicit lineup; the variant's classroom when empty
    pub participants: Vec<FileParticipantConfig>,
    /// Extra or overriding model prices, per million tokens
    pub pricing: HashMap<String, ModelPrice>,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    pub fn variant(&self) -> Variant {
        self.conversation.variant
    }

    /// Resolved lineup, without the entries that cannot be used.
    pub fn participants(&self) -> Vec<Participant> {
        if self.participants.is_empty() {
            return match self.variant() {
                Variant::Local => presets::local_classroom(),
                Variant::Hosted => presets::hosted_classroom(),
            };
        }

        self.participants
            .iter()
            .filter_map(|entry| entry.parse().0)
            .collect()
    }

    /// Built-in prices with the `[pricing]` table layered on top.
    pub fn price_table(&self) -> PriceTable {
        let overrides = self
            .pricing
            .iter()
            .fold(PriceTable::empty(), |table, (model, price)| {
                table.with_price(model, *price)
            });
        PriceTable::default().merge(overrides)
    }

    /// Turn loop parameters for the use case.
    pub fn conversation_params(&self) -> ConversationParams {
        let params = ConversationParams::for_variant(self.variant())
            .with_max_turns(self.conversation.max_turns())
            .with_pacing(Duration::from_millis(self.conversation.pacing_ms));

        if self.conversation.accounting() {
            params.with_accounting(self.price_table())
        } else {
            params.without_accounting()
        }
    }

    pub fn transcript_path(&self) -> PathBuf {
        PathBuf::from(
            self.output
                .transcript_path
                .as_deref()
                .unwrap_or_else(|| self.variant().default_transcript_path()),
        )
    }

    pub fn event_log_path(&self) -> Option<PathBuf> {
        self.output.event_log.as_deref().map(PathBuf::from)
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. each `[[participants]]` entry (provider, model, sampling ranges)
    /// 2. unique participant names
    /// 3. a non-empty lineup when turns are requested
    /// 4. a hosted credential when hosted participants are configured
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for entry in &self.participants {
            issues.extend(entry.parse().1);
        }

        let lineup = self.participants();

        let mut seen = HashSet::new();
        for participant in &lineup {
            if !seen.insert(participant.name()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateParticipant {
                        name: participant.name().to_string(),
                    },
                    format!(
                        "participants: '{}' appears more than once; names must be unique",
                        participant.name()
                    ),
                ));
            }
        }

        if lineup.is_empty() && self.conversation.max_turns() > 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoParticipants,
                "participants: no usable participants configured",
            ));
        }

        let uses_hosted = lineup
            .iter()
            .any(|p| p.provider() == ProviderKind::Hosted);
        if uses_hosted && self.providers.hosted.resolve_api_key().is_empty() {
            let message = format!(
                "providers.hosted: no API key found (set {} or providers.hosted.api_key)",
                self.providers.hosted.api_key_env
            );
            // The hosted variant refuses to start; a mixed lineup degrades
            // to sentinel entries for its hosted speakers.
            issues.push(match self.variant() {
                Variant::Hosted => ConfigIssue::error(ConfigIssueCode::MissingCredential, message),
                Variant::Local => ConfigIssue::warning(ConfigIssueCode::MissingCredential, message),
            });
        }

        issues
    }

    /// Fail on error-severity issues; hand back the warnings.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|i| i.severity == Severity::Error);

        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_domain::Model;

    const UNSET_KEY_VAR: &str = "COLLOQUY_TEST_NEVER_SET_KEY";

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[conversation]
variant = "local"
topic = "Ownership in Rust"
max_turns = 4
pacing_ms = 0

[providers.local]
base_url = "http://gpu-box:11434/v1"

[[participants]]
name = "Teacher"
role = "teacher"
model = "llama3.2:latest"
system_prompt = "You teach Rust."

[[participants]]
name = "Student"
model = "gemma3:1b"
system_prompt = "You learn Rust."
temperature = 0.9

[pricing."llama3.2:latest"]
input_per_million = 0.1
output_per_million = 0.2

[output]
transcript_path = "out/rust.json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.conversation.topic().content(), "Ownership in Rust");
        assert_eq!(config.providers.local.base_url, "http://gpu-box:11434/v1");

        let lineup = config.participants();
        assert_eq!(lineup.len(), 2);
        assert_eq!(lineup[1].model(), &Model::Gemma3_1b);
        assert_eq!(lineup[1].sampling().temperature, 0.9);

        let params = config.conversation_params();
        assert_eq!(params.max_turns, 4);
        assert_eq!(params.pacing, Duration::ZERO);
        assert!(!params.accounting_enabled());

        assert_eq!(config.transcript_path(), PathBuf::from("out/rust.json"));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config_uses_local_classroom() {
        let config = FileConfig::default();
        let lineup = config.participants();
        assert_eq!(lineup.len(), 3);
        assert!(lineup.iter().all(|p| p.provider() == ProviderKind::Local));
        assert_eq!(config.conversation_params().max_turns, 20);
        assert_eq!(config.transcript_path(), PathBuf::from("conversation_log.json"));
        assert!(config.event_log_path().is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_hosted_variant_defaults() {
        let mut config: FileConfig = toml::from_str(
            r#"
[conversation]
variant = "hosted"

[providers.hosted]
api_key = "sk-test"
"#,
        )
        .unwrap();
        config.providers.hosted.api_key_env = UNSET_KEY_VAR.to_string();

        let params = config.conversation_params();
        assert_eq!(params.max_turns, 6);
        assert!(params.accounting_enabled());
        assert_eq!(
            config.transcript_path(),
            PathBuf::from("conversation_log_openai.json")
        );
        assert_eq!(config.participants()[0].model(), &Model::Gpt4o);
        assert!(config.check().unwrap().is_empty());
    }

    #[test]
    fn test_hosted_variant_without_key_is_fatal() {
        let mut config = FileConfig::default();
        config.conversation.variant = Variant::Hosted;
        config.providers.hosted.api_key_env = UNSET_KEY_VAR.to_string();

        let err = config.check().unwrap_err();
        assert!(matches!(err.0[0].code, ConfigIssueCode::MissingCredential));
        assert!(err.to_string().contains(UNSET_KEY_VAR));
    }

    #[test]
    fn test_hosted_variant_with_template_key_is_fatal() {
        let mut config = FileConfig::default();
        config.conversation.variant = Variant::Hosted;
        config.providers.hosted.api_key = Some("sk-your-key-here".to_string());
        config.providers.hosted.api_key_env = UNSET_KEY_VAR.to_string();

        let err = config.check().unwrap_err();
        assert!(matches!(err.0[0].code, ConfigIssueCode::MissingCredential));
    }

    #[test]
    fn test_mixed_lineup_without_key_warns() {
        let mut config: FileConfig = toml::from_str(
            r#"
[[participants]]
name = "Local"
model = "llama3.2:1b"

[[participants]]
name = "Hosted"
provider = "hosted"
model = "gpt-4o-mini"
"#,
        )
        .unwrap();
        config.providers.hosted.api_key_env = UNSET_KEY_VAR.to_string();

        let warnings = config.check().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0].code, ConfigIssueCode::MissingCredential));
    }

    #[test]
    fn test_duplicate_names_are_errors() {
        let config: FileConfig = toml::from_str(
            r#"
[[participants]]
name = "Sam"
model = "a"

[[participants]]
name = "Sam"
model = "b"
"#,
        )
        .unwrap();

        let issues = config.validate();
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::DuplicateParticipant { name } if name == "Sam"
        )));
        assert!(config.check().is_err());
    }

    #[test]
    fn test_unusable_lineup_reports_no_participants() {
        let config: FileConfig = toml::from_str(
            r#"
[[participants]]
name = "Ghost"
provider = "nowhere"
model = "m"
"#,
        )
        .unwrap();

        let codes: Vec<_> = config.validate().into_iter().map(|i| i.code).collect();
        assert!(codes.contains(&ConfigIssueCode::NoParticipants));
        assert!(codes.iter().any(|c| matches!(c, ConfigIssueCode::UnknownProvider { .. })));
    }

    #[test]
    fn test_pricing_overrides_merge_with_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[pricing."gpt-4o"]
input_per_million = 5.0
output_per_million = 15.0

[pricing."my-model"]
input_per_million = 1.0
output_per_million = 2.0
"#,
        )
        .unwrap();

        let table = config.price_table();
        assert_eq!(table.price_of("gpt-4o"), ModelPrice::new(5.0, 15.0));
        assert_eq!(table.price_of("my-model"), ModelPrice::new(1.0, 2.0));
        assert_eq!(table.price_of("o1-mini"), ModelPrice::new(3.0, 12.0));
    }
}
