//! Provider clients and their per-kind registry.

pub mod client;
pub mod registry;

pub use client::{ERROR_SENTINEL_PREFIX, ProviderClient, ProviderReply, error_sentinel};
pub use registry::ProviderRegistry;
