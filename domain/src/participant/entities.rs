//! Participant entity

use super::sampling::SamplingConfig;
use crate::core::model::Model;
use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};

/// Semantic tag for a participant. Informational only; scheduling
/// treats every role the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Teacher,
    #[default]
    Student,
}

impl ParticipantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::Teacher => "teacher",
            ParticipantRole::Student => "student",
        }
    }
}

impl std::fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured conversational agent.
///
/// Built once before a run and never mutated during it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    role: ParticipantRole,
    provider: ProviderKind,
    model: Model,
    system_prompt: String,
    sampling: SamplingConfig,
}

impl Participant {
    pub fn new(
        name: impl Into<String>,
        role: ParticipantRole,
        provider: ProviderKind,
        model: impl Into<Model>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            provider,
            model: model.into(),
            system_prompt: system_prompt.into(),
            sampling: SamplingConfig::default(),
        }
    }

    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> ParticipantRole {
        self.role
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_accessors() {
        let p = Participant::new(
            "Professor Maya",
            ParticipantRole::Teacher,
            ProviderKind::Local,
            Model::Llama32,
            "You are Professor Maya.",
        )
        .with_sampling(SamplingConfig::default().with_max_tokens(150));

        assert_eq!(p.name(), "Professor Maya");
        assert_eq!(p.role(), ParticipantRole::Teacher);
        assert_eq!(p.provider(), ProviderKind::Local);
        assert_eq!(p.model(), &Model::Llama32);
        assert_eq!(p.system_prompt(), "You are Professor Maya.");
        assert_eq!(p.sampling().max_tokens, 150);
    }

    #[test]
    fn test_model_from_str() {
        let p = Participant::new("X", ParticipantRole::Student, ProviderKind::Hosted, "gpt-4o", "");
        assert_eq!(p.model(), &Model::Gpt4o);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&ParticipantRole::Teacher).unwrap(),
            "\"teacher\""
        );
    }
}
