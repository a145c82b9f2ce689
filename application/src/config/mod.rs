//! Application-level configuration.
//!
//! - [`ConversationParams`]: turn budget, pacing and accounting for a run

pub mod conversation_params;

pub use conversation_params::ConversationParams;
