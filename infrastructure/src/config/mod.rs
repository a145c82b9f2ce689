//! Configuration file loading for colloquy
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed with `COLLOQUY_`
//! 2. `--config <path>` specified file
//! 3. Project root: `./colloquy.toml` or `./.colloquy.toml`
//! 4. Global: `$XDG_CONFIG_HOME/colloquy/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileConversationConfig, FileHostedProviderConfig,
    FileLocalProviderConfig, FileOutputConfig, FileParticipantConfig, FileProvidersConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
