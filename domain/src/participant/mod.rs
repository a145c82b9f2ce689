//! Participants: who takes part in a conversation and how their model is called.

pub mod entities;
pub mod presets;
pub mod sampling;
