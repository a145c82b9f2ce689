//! Provider client: the degrade-to-text boundary.
//!
//! Wraps one [`LlmGateway`] and turns every failure into a sentinel string
//! that lands in the transcript like any other utterance, so one broken
//! participant never aborts the conversation.

use crate::ports::llm_gateway::{CompletionRequest, LlmGateway, TokenUsage};
use colloquy_domain::{Message, Model, ProviderKind, SamplingConfig};
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix shared by every sentinel error text.
pub const ERROR_SENTINEL_PREFIX: &str = "[Error calling ";

/// `"[Error calling <model_id>: <cause>]"`
pub fn error_sentinel(model: &Model, cause: impl std::fmt::Display) -> String {
    format!("{}{}: {}]", ERROR_SENTINEL_PREFIX, model, cause)
}

/// What a participant "said" for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub text: String,
    pub usage: Option<TokenUsage>,
    /// `true` when `text` is a sentinel error text.
    pub failed: bool,
}

impl ProviderReply {
    pub fn failure(model: &Model, cause: impl std::fmt::Display) -> Self {
        Self {
            text: error_sentinel(model, cause),
            usage: None,
            failed: true,
        }
    }
}

/// Uniform "send messages, get text" contract over one provider endpoint.
#[derive(Clone)]
pub struct ProviderClient {
    gateway: Arc<dyn LlmGateway>,
}

impl ProviderClient {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub fn kind(&self) -> ProviderKind {
        self.gateway.kind()
    }

    /// Send `messages` to `model`. Never fails.
    ///
    /// Sampling fields the provider cannot express are dropped by the
    /// gateway without error.
    pub async fn send(
        &self,
        model: &Model,
        messages: Vec<Message>,
        sampling: &SamplingConfig,
    ) -> ProviderReply {
        if sampling.top_k.is_some() && !self.kind().supports_top_k() {
            debug!(
                "top_k is not supported by the {} provider; ignoring it for {}",
                self.kind(),
                model
            );
        }

        let request = CompletionRequest::new(model.clone(), messages, sampling.clone());

        match self.gateway.complete(&request).await {
            Ok(completion) => ProviderReply {
                text: completion.text,
                usage: completion.usage,
                failed: false,
            },
            Err(e) => {
                warn!("Call to {} via {} failed: {}", model, self.kind(), e);
                ProviderReply::failure(model, e)
            }
        }
    }
}
