//! OpenAI-compatible chat-completion adapter.

mod gateway;
mod types;

pub use gateway::OpenAiCompatGateway;
