//! One client per provider kind, built once and shared for the whole run.

use super::client::ProviderClient;
use crate::ports::llm_gateway::LlmGateway;
use colloquy_domain::ProviderKind;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps each [`ProviderKind`] to its [`ProviderClient`].
///
/// Constructed explicitly and passed to the use case, so several
/// conversations with different endpoints can run in one process.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    clients: HashMap<ProviderKind, ProviderClient>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a gateway under its own kind, replacing any previous one.
    pub fn with_gateway(mut self, gateway: Arc<dyn LlmGateway>) -> Self {
        self.register(gateway);
        self
    }

    pub fn register(&mut self, gateway: Arc<dyn LlmGateway>) {
        let kind = gateway.kind();
        self.clients.insert(kind, ProviderClient::new(gateway));
    }

    pub fn client_for(&self, kind: ProviderKind) -> Option<&ProviderClient> {
        self.clients.get(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        self.clients.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{Completion, CompletionRequest, GatewayError};
    use async_trait::async_trait;

    struct KindOnly(ProviderKind);

    #[async_trait]
    impl LlmGateway for KindOnly {
        fn kind(&self) -> ProviderKind {
            self.0
        }

        async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, GatewayError> {
            Ok(Completion::new(self.0.as_str()))
        }
    }

    #[test]
    fn test_lookup_by_kind() {
        let registry = ProviderRegistry::new().with_gateway(Arc::new(KindOnly(ProviderKind::Local)));
        assert!(registry.client_for(ProviderKind::Local).is_some());
        assert!(registry.client_for(ProviderKind::Hosted).is_none());
    }

    #[test]
    fn test_register_replaces_same_kind() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(KindOnly(ProviderKind::Hosted)));
        registry.register(Arc::new(KindOnly(ProviderKind::Hosted)));
        assert_eq!(registry.kinds().count(), 1);
    }
}
