//! Conversation parameters: use case loop control.
//!
//! [`ConversationParams`] groups the static parameters that control the
//! turn loop in [`RunConversationUseCase`](crate::use_cases::run_conversation::RunConversationUseCase).

use colloquy_domain::{PriceTable, Variant};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Turn loop control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationParams {
    /// Exact number of turns to run.
    pub max_turns: usize,
    /// Delay inserted between turns in incremental mode.
    ///
    /// Cosmetic only: it gives a live consumer time to render each turn.
    /// Batch runs ignore it.
    pub pacing: Duration,
    /// Price table for usage accounting. `None` disables accounting.
    pub pricing: Option<PriceTable>,
}

impl Default for ConversationParams {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl ConversationParams {
    pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

    /// Defaults for a variant: turn budget and whether accounting is on.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            max_turns: variant.default_max_turns(),
            pacing: Self::DEFAULT_PACING,
            pricing: variant.accounting_by_default().then(PriceTable::default),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_accounting(mut self, prices: PriceTable) -> Self {
        self.pricing = Some(prices);
        self
    }

    pub fn without_accounting(mut self) -> Self {
        self.pricing = None;
        self
    }

    pub fn accounting_enabled(&self) -> bool {
        self.pricing.is_some()
    }
}
