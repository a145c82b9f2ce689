//! Prompt synthesis.

pub mod template;

pub use template::{PromptTemplate, TurnPrompt};
