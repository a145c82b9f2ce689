//! Chat messages exchanged with providers.

pub mod entities;
