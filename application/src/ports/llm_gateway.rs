//! LLM Gateway port
//!
//! Defines the interface for communicating with a chat-completion endpoint.

use async_trait::async_trait;
use colloquy_domain::{Message, Model, ProviderKind, SamplingConfig};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed (status {status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One chat-completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub sampling: SamplingConfig,
}

impl CompletionRequest {
    pub fn new(model: Model, messages: Vec<Message>, sampling: SamplingConfig) -> Self {
        Self {
            model,
            messages,
            sampling,
        }
    }
}

/// Token counts reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// A successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, input_tokens: u64, output_tokens: u64) -> Self {
        self.usage = Some(TokenUsage {
            input_tokens,
            output_tokens,
        });
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to one provider
/// endpoint. Implementations (adapters) live in the infrastructure layer.
/// Errors are returned as-is; turning them into transcript text is the job
/// of [`ProviderClient`](crate::provider::ProviderClient).
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Which provider kind this gateway serves
    fn kind(&self) -> ProviderKind;

    /// Send the messages and return the model's reply
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError>;
}
