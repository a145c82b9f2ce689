//! Participant lineup from TOML (`[[participants]]` array)

use colloquy_domain::{
    ConfigIssue, ConfigIssueCode, Participant, ParticipantRole, ProviderKind, SamplingConfig,
};
use serde::{Deserialize, Serialize};

/// One raw `[[participants]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParticipantConfig {
    pub name: String,
    pub role: ParticipantRole,
    /// "local" or "hosted"
    pub provider: Option<String>,
    pub model: String,
    pub system_prompt: String,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_k: Option<u32>,
}

impl FileParticipantConfig {
    fn sampling(&self) -> SamplingConfig {
        let defaults = SamplingConfig::default();
        SamplingConfig {
            temperature: self.temperature.unwrap_or(defaults.temperature),
            top_p: self.top_p.unwrap_or(defaults.top_p),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            top_k: self.top_k,
        }
    }

    fn sampling_issues(&self) -> Vec<ConfigIssue> {
        let sampling = self.sampling();
        let mut out_of_range = Vec::new();
        if !(0.0..=2.0).contains(&sampling.temperature) {
            out_of_range.push(("temperature", "0.0..=2.0"));
        }
        if !(0.0..=1.0).contains(&sampling.top_p) {
            out_of_range.push(("top_p", "0.0..=1.0"));
        }
        if sampling.max_tokens == 0 {
            out_of_range.push(("max_tokens", "at least 1"));
        }

        out_of_range
            .into_iter()
            .map(|(field, range)| {
                ConfigIssue::warning(
                    ConfigIssueCode::SamplingOutOfRange {
                        participant: self.name.clone(),
                        field: field.to_string(),
                    },
                    format!(
                        "participants.{}: {} is outside {}; the provider may reject it",
                        self.name, field, range
                    ),
                )
            })
            .collect()
    }

    /// Build the domain participant, reporting every problem found.
    ///
    /// Returns `None` when the entry cannot be used at all.
    pub fn parse(&self) -> (Option<Participant>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let provider = match self.provider.as_deref() {
            None => Some(ProviderKind::default()),
            Some(value) => match value.parse::<ProviderKind>() {
                Ok(kind) => Some(kind),
                Err(_) => {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::UnknownProvider {
                            participant: self.name.clone(),
                            value: value.to_string(),
                        },
                        format!(
                            "participants.{}: unknown provider '{}' (expected 'local' or 'hosted')",
                            self.name, value
                        ),
                    ));
                    None
                }
            },
        };

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModel {
                    participant: self.name.clone(),
                },
                format!("participants.{}: model cannot be empty", self.name),
            ));
        }

        issues.extend(self.sampling_issues());

        let participant = provider
            .filter(|_| !self.model.trim().is_empty())
            .map(|provider| {
                Participant::new(
                    self.name.clone(),
                    self.role,
                    provider,
                    self.model.trim(),
                    self.system_prompt.clone(),
                )
                .with_sampling(self.sampling())
            });

        (participant, issues)
    }
}
