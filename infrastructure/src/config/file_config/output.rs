//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Where the finished transcript is written (variant default when unset)
    pub transcript_path: Option<String>,
    /// JSONL event log, one line per turn (disabled when unset)
    pub event_log: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            transcript_path: None,
            event_log: None,
            color: true,
        }
    }
}
