//! Provider kinds and their connection settings.
//!
//! `ProviderKind` is what a participant names in config; `ProviderConfig`
//! holds the resolved base URLs and credentials the gateways connect with.

use serde::{Deserialize, Serialize};

/// Default base URL of a local inference server (Ollama's OpenAI-compatible API).
pub const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:11434/v1";
/// Placeholder credential accepted by local inference servers.
pub const LOCAL_PLACEHOLDER_API_KEY: &str = "ollama";
/// Default base URL of the hosted API.
pub const DEFAULT_HOSTED_BASE_URL: &str = "https://api.openai.com/v1";
/// Environment variable holding the hosted API credential.
pub const DEFAULT_HOSTED_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Key shipped in the `.env` template; never a usable credential.
pub const HOSTED_API_KEY_TEMPLATE: &str = "sk-your-key-here";

/// Whether `key` looks like a real hosted credential.
pub fn is_usable_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != HOSTED_API_KEY_TEMPLATE
}

/// Which kind of backend serves a participant's model.
///
/// Selected once when the participant is built; the orchestrator never
/// re-inspects it per call beyond picking the matching client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// A locally reachable inference server with a configurable base URL.
    #[default]
    Local,
    /// The hosted API; requires a real credential.
    Hosted,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Local => "local",
            ProviderKind::Hosted => "hosted",
        }
    }

    /// Whether this provider forwards the `top_k` sampling parameter.
    ///
    /// The hosted chat-completions API has no such field, so it is dropped
    /// there without error.
    pub fn supports_top_k(&self) -> bool {
        matches!(self, ProviderKind::Local)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "ollama" => Ok(ProviderKind::Local),
            "hosted" | "openai" => Ok(ProviderKind::Hosted),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Local inference server settings.
    pub local: LocalProviderConfig,
    /// Hosted API settings.
    pub hosted: HostedProviderConfig,
}

/// Local inference server configuration.
#[derive(Debug, Clone)]
pub struct LocalProviderConfig {
    /// OpenAI-compatible base URL (default: "http://localhost:11434/v1").
    pub base_url: String,
    /// Credential sent to the server; any placeholder works.
    pub api_key: String,
}

impl Default for LocalProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOCAL_BASE_URL.to_string(),
            api_key: LOCAL_PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

/// Hosted API provider configuration.
#[derive(Debug, Clone)]
pub struct HostedProviderConfig {
    /// Base URL for the hosted API.
    pub base_url: String,
    /// Resolved credential. Empty when none was found; calls then fail
    /// with an authentication error.
    pub api_key: String,
}

impl Default for HostedProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOSTED_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("local".parse::<ProviderKind>(), Ok(ProviderKind::Local));
        assert_eq!("Ollama".parse::<ProviderKind>(), Ok(ProviderKind::Local));
        assert_eq!("openai".parse::<ProviderKind>(), Ok(ProviderKind::Hosted));
        assert!("bedrock".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_wire_format() {
        assert_eq!(serde_json::to_string(&ProviderKind::Hosted).unwrap(), "\"hosted\"");
        let kind: ProviderKind = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(kind, ProviderKind::Local);
    }

    #[test]
    fn test_top_k_capability() {
        assert!(ProviderKind::Local.supports_top_k());
        assert!(!ProviderKind::Hosted.supports_top_k());
    }

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.local.base_url, DEFAULT_LOCAL_BASE_URL);
        assert_eq!(config.local.api_key, "ollama");
        assert_eq!(config.hosted.base_url, DEFAULT_HOSTED_BASE_URL);
        assert!(config.hosted.api_key.is_empty());
    }

    #[test]
    fn test_template_key_is_not_a_credential() {
        assert!(!is_usable_api_key("sk-your-key-here"));
        assert!(!is_usable_api_key("   "));
        assert!(is_usable_api_key("sk-live-123"));
    }
}
