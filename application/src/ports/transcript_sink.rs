//! Transcript persistence port

use colloquy_domain::Transcript;
use thiserror::Error;

/// Errors that can occur while persisting a transcript
#[derive(Error, Debug)]
pub enum TranscriptSinkError {
    #[error("Failed to serialize transcript: {0}")]
    Serialization(String),

    #[error("Failed to write transcript to {path}: {message}")]
    Io { path: String, message: String },
}

/// Destination for a finished transcript.
pub trait TranscriptSink: Send + Sync {
    /// Write the whole transcript, replacing anything already there.
    fn persist(&self, transcript: &Transcript) -> Result<(), TranscriptSinkError>;

    /// Human-readable location, for reporting.
    fn location(&self) -> String;
}
