//! What a single executed turn produced.

use super::transcript::TranscriptEntry;
use crate::usage::accountant::UsageRecord;
use serde::{Deserialize, Serialize};

/// Result of one turn, as handed to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Zero-based turn index.
    pub index: usize,
    /// The entry appended to the transcript for this turn.
    pub entry: TranscriptEntry,
    /// Model the speaker used.
    pub model: String,
    /// Usage recorded for this call, when accounting is on and the
    /// provider reported token counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageRecord>,
    /// Whether the content is a sentinel error text.
    pub failed: bool,
}

impl TurnReport {
    pub fn speaker(&self) -> &str {
        &self.entry.speaker
    }

    pub fn content(&self) -> &str {
        &self.entry.content
    }
}
