//! Provider configuration from TOML (`[providers]` section)

use colloquy_domain::{
    DEFAULT_HOSTED_API_KEY_ENV, DEFAULT_HOSTED_BASE_URL, DEFAULT_LOCAL_BASE_URL,
    HostedProviderConfig, LOCAL_PLACEHOLDER_API_KEY, LocalProviderConfig, ProviderConfig,
    is_usable_api_key,
};
use serde::{Deserialize, Serialize};

/// Local inference server (`[providers.local]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocalProviderConfig {
    /// OpenAI-compatible base URL
    pub base_url: String,
    /// Placeholder credential; local servers ignore it
    pub api_key: String,
}

impl Default for FileLocalProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOCAL_BASE_URL.to_string(),
            api_key: LOCAL_PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

/// Hosted API (`[providers.hosted]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHostedProviderConfig {
    /// Base URL for the hosted API
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key. Prefer `api_key_env`.
    pub api_key: Option<String>,
}

impl Default for FileHostedProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOSTED_BASE_URL.to_string(),
            api_key_env: DEFAULT_HOSTED_API_KEY_ENV.to_string(),
            api_key: None,
        }
    }
}

impl FileHostedProviderConfig {
    /// Explicit key first, then the environment. Empty when neither holds
    /// a usable key; the `.env` template value counts as unset.
    pub fn resolve_api_key(&self) -> String {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| is_usable_api_key(k))
            .map(str::to_string)
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .map(|k| k.trim().to_string())
                    .filter(|k| is_usable_api_key(k))
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub local: FileLocalProviderConfig,
    pub hosted: FileHostedProviderConfig,
}

impl FileProvidersConfig {
    /// Convert to the domain type, resolving the hosted credential.
    pub fn to_provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            local: LocalProviderConfig {
                base_url: self.local.base_url.clone(),
                api_key: self.local.api_key.clone(),
            },
            hosted: HostedProviderConfig {
                base_url: self.hosted.base_url.clone(),
                api_key: self.hosted.resolve_api_key(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileProvidersConfig::default();
        assert_eq!(config.local.base_url, "http://localhost:11434/v1");
        assert_eq!(config.local.api_key, "ollama");
        assert_eq!(config.hosted.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_explicit_key_wins() {
        let hosted = FileHostedProviderConfig {
            api_key: Some("sk-explicit".to_string()),
            api_key_env: "COLLOQUY_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(hosted.resolve_api_key(), "sk-explicit");
    }

    #[test]
    fn test_missing_key_is_empty() {
        let hosted = FileHostedProviderConfig {
            api_key: Some("  ".to_string()),
            api_key_env: "COLLOQUY_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(hosted.resolve_api_key(), "");
        assert!(
            FileProvidersConfig {
                hosted,
                ..Default::default()
            }
            .to_provider_config()
            .hosted
            .api_key
            .is_empty()
        );
    }

    #[test]
    fn test_template_key_counts_as_missing() {
        let hosted = FileHostedProviderConfig {
            api_key: Some("sk-your-key-here".to_string()),
            api_key_env: "COLLOQUY_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(hosted.resolve_api_key(), "");
    }

    #[test]
    fn test_partial_section() {
        let config: FileProvidersConfig = toml::from_str(
            r#"
[local]
base_url = "http://gpu-box:11434/v1"
"#,
        )
        .unwrap();
        assert_eq!(config.local.base_url, "http://gpu-box:11434/v1");
        assert_eq!(config.local.api_key, "ollama");
        assert_eq!(config.hosted.base_url, "https://api.openai.com/v1");
    }
}
