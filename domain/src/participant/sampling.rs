//! Generation parameters passed through to a provider.

use serde::{Deserialize, Serialize};

/// Sampling parameters for one participant.
///
/// Every field has a default, so a partially specified config (or one
/// with unknown keys) still yields a usable value. `top_k` is optional
/// because not every provider honours it; see
/// [`ProviderKind::supports_top_k`](crate::providers::ProviderKind::supports_top_k).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl SamplingConfig {
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
    pub const DEFAULT_TOP_P: f32 = 0.9;
    pub const DEFAULT_MAX_TOKENS: u32 = 150;

    pub fn new(temperature: f32, top_p: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            top_p,
            max_tokens,
            top_k: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_TEMPERATURE,
            Self::DEFAULT_TOP_P,
            Self::DEFAULT_MAX_TOKENS,
        )
    }
}
