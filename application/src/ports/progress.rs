//! Progress notification port
//!
//! Defines the interface for reporting progress while a conversation runs.

use colloquy_domain::{Participant, Transcript, TurnReport, UsageSummary};

/// Callback for progress updates during a conversation
///
/// Implementations live in the presentation layer. They must not block for
/// long or influence the orchestration; they only observe it.
pub trait ConversationProgress: Send + Sync {
    /// Called once before the first turn
    fn on_run_start(&self, _participants: &[Participant], _max_turns: usize) {}

    /// Called when a participant is about to be asked for its turn
    fn on_turn_start(&self, turn: usize, speaker: &Participant);

    /// Called after the turn's entry was appended to the transcript
    fn on_turn_complete(&self, report: &TurnReport);

    /// Called once after the last turn (or after an interruption)
    fn on_run_complete(&self, _transcript: &Transcript, _usage: Option<&UsageSummary>) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ConversationProgress for NoProgress {
    fn on_turn_start(&self, _turn: usize, _speaker: &Participant) {}
    fn on_turn_complete(&self, _report: &TurnReport) {}
}
