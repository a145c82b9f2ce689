//! CLI command definitions

use clap::{Parser, ValueEnum};
use colloquy_domain::Variant;
use std::path::PathBuf;

/// Which built-in setup to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// Local inference server, no cost tracking
    Local,
    /// Hosted API with token and cost tracking
    Hosted,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Local => Variant::Local,
            VariantArg::Hosted => Variant::Hosted,
        }
    }
}

/// CLI arguments for colloquy
#[derive(Parser, Debug)]
#[command(name = "colloquy")]
#[command(author, version, about = "Round-robin conversations between LLM-backed participants")]
#[command(long_about = r#"
Colloquy puts several LLM-backed participants in a room and lets them talk.

Participants speak in a fixed rotation. Each one sees the whole conversation
so far and answers in character, for a fixed number of turns. The transcript
is saved as JSON when the run completes.

Configuration files are loaded from (in priority order):
1. COLLOQUY_* environment variables
2. --config <path>     Explicit config file
3. ./colloquy.toml     Project-level config
4. ~/.config/colloquy/config.toml   Global config

Example:
  colloquy
  colloquy "Explain Python list comprehensions" -t 9
  colloquy --variant hosted --stream
  colloquy --list-models
"#)]
pub struct Cli {
    /// Topic the first speaker introduces
    pub topic: Option<String>,

    /// Number of turns to run
    #[arg(short = 't', long = "turns", value_name = "N")]
    pub turns: Option<usize>,

    /// Built-in setup to start from
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Base URL of the local inference server
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// API key for the hosted provider (overrides the environment)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Delay between turns in streaming mode, in milliseconds
    #[arg(long, value_name = "MS")]
    pub pacing_ms: Option<u64>,

    /// Show each turn as soon as it is ready, with pacing between turns
    #[arg(long)]
    pub stream: bool,

    /// Disable token and cost accounting
    #[arg(long)]
    pub no_accounting: bool,

    /// Where to save the transcript
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write every turn to a JSONL event log
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Write diagnostic logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List available models for both providers and exit
    #[arg(long)]
    pub list_models: bool,
}
