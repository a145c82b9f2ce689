//! Turn scheduling.

use crate::core::error::DomainError;
use crate::participant::entities::Participant;
use std::collections::HashSet;

/// Fixed round-robin rotation.
///
/// No priority, backoff or skipping: a participant whose last call failed
/// still speaks on its next natural slot.
pub struct TurnScheduler;

impl TurnScheduler {
    /// `participants[turn_index mod len]`, or `None` for an empty lineup.
    pub fn next_speaker(turn_index: usize, participants: &[Participant]) -> Option<&Participant> {
        if participants.is_empty() {
            return None;
        }
        participants.get(turn_index % participants.len())
    }

    /// A lineup can run `max_turns` turns when it has a speaker for every
    /// turn and no two participants share a name.
    pub fn check_lineup(participants: &[Participant], max_turns: usize) -> Result<(), DomainError> {
        if participants.is_empty() && max_turns > 0 {
            return Err(DomainError::NoParticipants);
        }

        let mut seen = HashSet::new();
        for participant in participants {
            if !seen.insert(participant.name()) {
                return Err(DomainError::DuplicateParticipant(
                    participant.name().to_string(),
                ));
            }
        }

        Ok(())
    }
}
