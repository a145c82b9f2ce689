//! Model discovery for both provider kinds.
//!
//! Local discovery walks an explicit fallback chain:
//! 1. [`DiscoveryStage::TagsEndpoint`]: the server's native `/api/tags`
//! 2. [`DiscoveryStage::ModelsEndpoint`]: the OpenAI-compatible `/models`
//! 3. a built-in list ([`Model::local_fallbacks`])
//!
//! A failing stage is logged at debug level and the next one is tried.
//! Discovery never fails as a whole.

use async_trait::async_trait;
use colloquy_application::ports::model_catalog::ModelCatalog;
use colloquy_domain::{LocalProviderConfig, Model, ProviderKind};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Timeout for the native tags endpoint.
const TAGS_TIMEOUT: Duration = Duration::from_secs(2);

/// A step of the local discovery chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStage {
    TagsEndpoint,
    ModelsEndpoint,
}

impl std::fmt::Display for DiscoveryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryStage::TagsEndpoint => write!(f, "tags endpoint"),
            DiscoveryStage::ModelsEndpoint => write!(f, "models endpoint"),
        }
    }
}

#[derive(Error, Debug)]
#[error("{stage} failed: {cause}")]
pub struct DiscoveryError {
    pub stage: DiscoveryStage,
    pub cause: String,
}

impl DiscoveryError {
    fn new(stage: DiscoveryStage, cause: impl std::fmt::Display) -> Self {
        Self {
            stage,
            cause: cause.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagEntry>,
}

#[derive(Deserialize)]
struct TagEntry {
    name: String,
}

#[derive(Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    data: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    id: String,
}

/// Lists models installed on a local inference server.
pub struct LocalModelDiscovery {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LocalModelDiscovery {
    pub fn new(config: &LocalProviderConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// `<base without /v1>/api/tags`
    pub fn tags_url(&self) -> String {
        let root = self.base_url.strip_suffix("/v1").unwrap_or(&self.base_url);
        format!("{}/api/tags", root)
    }

    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    async fn query(&self, stage: DiscoveryStage) -> Result<Vec<Model>, DiscoveryError> {
        let err = |e: reqwest::Error| DiscoveryError::new(stage, e);

        match stage {
            DiscoveryStage::TagsEndpoint => {
                let response = self
                    .client
                    .get(self.tags_url())
                    .timeout(TAGS_TIMEOUT)
                    .send()
                    .await
                    .map_err(err)?
                    .error_for_status()
                    .map_err(err)?;
                let tags: TagsResponse = response.json().await.map_err(err)?;
                Ok(tags.models.into_iter().map(|m| Model::from(m.name)).collect())
            }
            DiscoveryStage::ModelsEndpoint => {
                let response = self
                    .client
                    .get(self.models_url())
                    .bearer_auth(&self.api_key)
                    .send()
                    .await
                    .map_err(err)?
                    .error_for_status()
                    .map_err(err)?;
                let models: ModelsResponse = response.json().await.map_err(err)?;
                Ok(models.data.into_iter().map(|m| Model::from(m.id)).collect())
            }
        }
    }
}

#[async_trait]
impl ModelCatalog for LocalModelDiscovery {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    async fn list_models(&self) -> Vec<Model> {
        for stage in [DiscoveryStage::TagsEndpoint, DiscoveryStage::ModelsEndpoint] {
            match self.query(stage).await {
                Ok(models) => {
                    debug!("Discovered {} local models via {}", models.len(), stage);
                    return models;
                }
                Err(e) => debug!("Local model discovery: {}", e),
            }
        }

        debug!("Local model discovery: using built-in fallback list");
        Model::local_fallbacks()
    }
}

/// Curated list of hosted models. No network access.
#[derive(Debug, Default)]
pub struct HostedModelCatalog;

#[async_trait]
impl ModelCatalog for HostedModelCatalog {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Hosted
    }

    async fn list_models(&self) -> Vec<Model> {
        Model::hosted_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discovery(base_url: &str) -> LocalModelDiscovery {
        LocalModelDiscovery::new(&LocalProviderConfig {
            base_url: base_url.to_string(),
            api_key: "ollama".to_string(),
        })
    }

    #[test]
    fn test_tags_url_strips_api_version() {
        assert_eq!(
            discovery("http://localhost:11434/v1").tags_url(),
            "http://localhost:11434/api/tags"
        );
        assert_eq!(
            discovery("http://localhost:11434/v1/").tags_url(),
            "http://localhost:11434/api/tags"
        );
        assert_eq!(
            discovery("http://gpu-box:8080").tags_url(),
            "http://gpu-box:8080/api/tags"
        );
    }

    #[test]
    fn test_models_url() {
        assert_eq!(
            discovery("http://localhost:11434/v1").models_url(),
            "http://localhost:11434/v1/models"
        );
    }

    #[test]
    fn test_response_shapes() {
        let tags: TagsResponse =
            serde_json::from_str(r#"{"models": [{"name": "llama3.2:1b", "size": 1}]}"#).unwrap();
        assert_eq!(tags.models[0].name, "llama3.2:1b");

        let models: ModelsResponse =
            serde_json::from_str(r#"{"object": "list", "data": [{"id": "gemma3:1b"}]}"#).unwrap();
        assert_eq!(models.data[0].id, "gemma3:1b");
    }

    #[tokio::test]
    async fn test_unreachable_server_falls_back() {
        let models = discovery("http://127.0.0.1:1/v1").list_models().await;
        assert_eq!(models, Model::local_fallbacks());
    }

    #[tokio::test]
    async fn test_hosted_catalog() {
        let models = HostedModelCatalog.list_models().await;
        let ids: Vec<&str> = models.iter().map(Model::as_str).collect();
        assert_eq!(
            ids,
            vec!["gpt-4o", "gpt-4o-mini", "o1-preview", "o1-mini", "gpt-3.5-turbo"]
        );
    }
}
