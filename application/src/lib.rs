//! Application layer for colloquy
//!
//! This crate contains use cases, port definitions, provider clients and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod provider;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConversationParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{Completion, CompletionRequest, GatewayError, LlmGateway, TokenUsage},
    model_catalog::ModelCatalog,
    progress::{ConversationProgress, NoProgress},
    transcript_sink::{TranscriptSink, TranscriptSinkError},
};
pub use provider::{ERROR_SENTINEL_PREFIX, ProviderClient, ProviderRegistry, ProviderReply};
pub use use_cases::run_conversation::{
    ConversationOutcome, ConversationStatus, ConversationSteps, RunConversationError,
    RunConversationInput, RunConversationUseCase,
};
