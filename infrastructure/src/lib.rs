//! Infrastructure layer for colloquy
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: OpenAI-compatible gateways, model discovery,
//! configuration file loading, transcript and event-log writers.

pub mod config;
pub mod logging;
pub mod providers;
pub mod transcript;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig};
pub use logging::JsonlConversationLogger;
pub use providers::{
    HostedModelCatalog, LocalModelDiscovery, OpenAiCompatGateway, build_registry, catalog_for,
};
pub use transcript::JsonTranscriptWriter;
