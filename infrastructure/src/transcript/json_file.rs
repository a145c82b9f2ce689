//! JSON file sink for finished transcripts.

use colloquy_application::ports::transcript_sink::{TranscriptSink, TranscriptSinkError};
use colloquy_domain::Transcript;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the transcript as a pretty-printed JSON array of
/// `{"speaker", "message"}` objects, replacing any existing file.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub struct JsonTranscriptWriter {
    path: PathBuf,
}

impl JsonTranscriptWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> TranscriptSinkError {
        TranscriptSinkError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}

impl TranscriptSink for JsonTranscriptWriter {
    fn persist(&self, transcript: &Transcript) -> Result<(), TranscriptSinkError> {
        let json = serde_json::to_string_pretty(transcript)
            .map_err(|e| TranscriptSinkError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        info!(
            "Saved {} transcript entries to {}",
            transcript.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colloquy_domain::TranscriptEntry;

    #[test]
    fn test_empty_transcript_writes_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversation_log.json");
        JsonTranscriptWriter::new(&path)
            .persist(&Transcript::new())
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_layout_and_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let transcript = Transcript::from(vec![
            TranscriptEntry::new("Professor Maya", "print(\"¡Hola!\")"),
            TranscriptEntry::new("Curious George", "Wow 🐍"),
        ]);

        JsonTranscriptWriter::new(&path).persist(&transcript).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("[\n  {\n    \"speaker\": \"Professor Maya\",\n    \"message\":"));
        assert!(content.contains("¡Hola!"));
        assert!(content.contains("🐍"));

        let back: Transcript = serde_json::from_str(&content).unwrap();
        assert_eq!(back, transcript);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, "stale content that is longer than the new one").unwrap();

        JsonTranscriptWriter::new(&path)
            .persist(&Transcript::new())
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("today.json");
        let writer = JsonTranscriptWriter::new(&path);
        writer.persist(&Transcript::new()).unwrap();
        assert!(path.exists());
        assert_eq!(writer.location(), path.display().to_string());
    }
}
