//! Provider adapters: chat-completion gateways and model discovery.

pub mod discovery;
pub mod openai_compat;

pub use discovery::{DiscoveryError, DiscoveryStage, HostedModelCatalog, LocalModelDiscovery};
pub use openai_compat::OpenAiCompatGateway;

use colloquy_application::ports::model_catalog::ModelCatalog;
use colloquy_application::provider::ProviderRegistry;
use colloquy_domain::{ProviderConfig, ProviderKind};
use std::sync::Arc;

/// Build one gateway per provider kind.
///
/// Both kinds are always registered. A hosted gateway without a credential
/// still exists; its calls fail with an authentication error that surfaces
/// as a sentinel entry.
pub fn build_registry(config: &ProviderConfig) -> ProviderRegistry {
    ProviderRegistry::new()
        .with_gateway(Arc::new(OpenAiCompatGateway::local(&config.local)))
        .with_gateway(Arc::new(OpenAiCompatGateway::hosted(&config.hosted)))
}

/// Model catalog for a provider kind.
pub fn catalog_for(kind: ProviderKind, config: &ProviderConfig) -> Box<dyn ModelCatalog> {
    match kind {
        ProviderKind::Local => Box::new(LocalModelDiscovery::new(&config.local)),
        ProviderKind::Hosted => Box::new(HostedModelCatalog),
    }
}
