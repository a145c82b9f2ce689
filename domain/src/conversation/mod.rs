//! Conversation state: the transcript, the rotation, and per-turn reports.

pub mod scheduler;
pub mod transcript;
pub mod turn;
