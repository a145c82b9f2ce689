//! Shared conversation history.
//!
//! The transcript is the only state participants share. It is
//! append-only: entries are never edited, removed or reordered.

use serde::{Deserialize, Serialize};

/// One utterance in the conversation.
///
/// `content` is either model output or a sentinel error text; both
/// look the same to every consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: String,
    #[serde(rename = "message")]
    pub content: String,
}

impl TranscriptEntry {
    pub fn new(speaker: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            content: content.into(),
        }
    }

    /// `"<speaker>: <content>"`
    pub fn render(&self) -> String {
        format!("{}: {}", self.speaker, self.content)
    }
}

/// Ordered, append-only log of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Text used when an empty history has to be rendered.
    pub const EMPTY_PLACEHOLDER: &'static str = "No conversation yet.";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Render every entry as `"<speaker>: <content>"`, separated by a blank line.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return Self::EMPTY_PLACEHOLDER.to_string();
        }
        self.entries
            .iter()
            .map(TranscriptEntry::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<Vec<TranscriptEntry>> for Transcript {
    fn from(entries: Vec<TranscriptEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptEntry;
    type IntoIter = std::slice::Iter<'a, TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_as_speaker_message() {
        let entry = TranscriptEntry::new("Professor Maya", "print(\"Hello\")");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["speaker"], "Professor Maya");
        assert_eq!(json["message"], "print(\"Hello\")");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn test_transcript_is_a_plain_array() {
        let mut t = Transcript::new();
        t.push(TranscriptEntry::new("A", "one"));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"[{"speaker":"A","message":"one"}]"#);
        assert_eq!(serde_json::to_string(&Transcript::new()).unwrap(), "[]");
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let mut t = Transcript::new();
        t.push(TranscriptEntry::new("A", "first"));
        t.push(TranscriptEntry::new("B", "second\nline"));
        t.push(TranscriptEntry::new("A", "[Error calling x: boom]"));
        let json = serde_json::to_string_pretty(&t).unwrap();
        let back: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_render() {
        assert_eq!(Transcript::new().render(), "No conversation yet.");

        let mut t = Transcript::new();
        t.push(TranscriptEntry::new("A", "hi"));
        t.push(TranscriptEntry::new("B", "hello"));
        assert_eq!(t.render(), "A: hi\n\nB: hello");
    }
}
