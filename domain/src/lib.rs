//! Domain layer for colloquy
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Participant**: a named agent with a persona (system prompt), a model,
//!   a provider kind and sampling parameters
//! - **Transcript**: the append-only history every participant reads from
//! - **Turn**: one slot in the round-robin rotation, producing one entry
//! - **Usage**: per-call token counts priced from a static table

pub mod config;
pub mod conversation;
pub mod core;
pub mod participant;
pub mod prompt;
pub mod providers;
pub mod session;
pub mod usage;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity, Variant};
pub use conversation::{
    scheduler::TurnScheduler,
    transcript::{Transcript, TranscriptEntry},
    turn::TurnReport,
};
pub use core::{
    error::DomainError,
    model::Model,
    topic::{DEFAULT_TOPIC, Topic},
};
pub use participant::{
    entities::{Participant, ParticipantRole},
    presets,
    sampling::SamplingConfig,
};
pub use prompt::{PromptTemplate, TurnPrompt};
pub use providers::{
    DEFAULT_HOSTED_API_KEY_ENV, DEFAULT_HOSTED_BASE_URL, DEFAULT_LOCAL_BASE_URL,
    HostedProviderConfig, LOCAL_PLACEHOLDER_API_KEY, LocalProviderConfig, ProviderConfig,
    ProviderKind, is_usable_api_key,
};
pub use session::entities::{Message, Role};
pub use usage::{
    accountant::{UsageAccountant, UsageRecord, UsageSummary},
    pricing::{ModelPrice, PriceTable},
};
