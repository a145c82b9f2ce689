//! Model catalog port
//!
//! Lists the model ids a provider can serve. Used to offer choices to the
//! operator; the orchestrator itself only ever sees resolved model ids.

use async_trait::async_trait;
use colloquy_domain::{Model, ProviderKind};

/// Source of selectable model ids for one provider kind.
///
/// Listing never fails: implementations fall back to a built-in list when
/// the provider cannot be reached.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn list_models(&self) -> Vec<Model>;
}
