//! [`LlmGateway`] over an OpenAI-compatible chat-completion API.
//!
//! The same adapter serves both provider kinds: a local inference server
//! (Ollama and friends) and the hosted API. They differ only in base URL,
//! credential, and whether `top_k` is forwarded.

use super::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use colloquy_application::ports::llm_gateway::{
    Completion, CompletionRequest, GatewayError, LlmGateway,
};
use colloquy_domain::{HostedProviderConfig, LocalProviderConfig, ProviderKind};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// One HTTP client per provider kind, reused for every call of the run.
pub struct OpenAiCompatGateway {
    kind: ProviderKind,
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiCompatGateway {
    pub fn new(kind: ProviderKind, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            kind,
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn local(config: &LocalProviderConfig) -> Self {
        Self::new(ProviderKind::Local, &config.base_url, &config.api_key)
    }

    pub fn hosted(config: &HostedProviderConfig) -> Self {
        Self::new(ProviderKind::Hosted, &config.base_url, &config.api_key)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn body<'a>(&self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        let sampling = &request.sampling;
        ChatRequest {
            model: request.model.as_str(),
            messages: &request.messages,
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            max_tokens: sampling.max_tokens,
            top_k: sampling.top_k.filter(|_| self.kind.supports_top_k()),
        }
    }
}

/// Map a non-success HTTP status to a gateway error.
fn status_error(status: StatusCode, message: String) -> GatewayError {
    match status.as_u16() {
        401 | 403 => GatewayError::AuthenticationFailed(message),
        404 => GatewayError::ModelNotAvailable(message),
        429 => GatewayError::RateLimited(message),
        code => GatewayError::RequestFailed {
            status: code,
            message,
        },
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        debug!("POST {} (model: {})", self.endpoint(), request.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.body(request))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(status_error(status, message));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .first_text()
            .ok_or_else(|| GatewayError::InvalidResponse("no choices".to_string()))?;

        let completion = Completion::new(text);
        Ok(match parsed.usage {
            Some(usage) => completion.with_usage(usage.prompt_tokens, usage.completion_tokens),
            None => completion,
        })
    }
}
