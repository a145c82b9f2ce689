//! Conversation variant value object

use serde::{Deserialize, Serialize};

/// Which flavour of run to start from.
///
/// A variant only chooses defaults (lineup, turn budget, accounting,
/// transcript path); it never changes orchestration behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Local inference server, no cost tracking (default)
    #[default]
    Local,
    /// Hosted API with token and cost tracking
    Hosted,
}

impl Variant {
    pub fn default_max_turns(&self) -> usize {
        match self {
            Variant::Local => 20,
            Variant::Hosted => 6,
        }
    }

    pub fn default_transcript_path(&self) -> &'static str {
        match self {
            Variant::Local => "conversation_log.json",
            Variant::Hosted => "conversation_log_openai.json",
        }
    }

    pub fn accounting_by_default(&self) -> bool {
        matches!(self, Variant::Hosted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Local => "local",
            Variant::Hosted => "hosted",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
