//! Run Conversation use case
//!
//! Orchestrates a round-robin conversation: pick the speaker, build its
//! prompt from the shared transcript, call its provider, append the reply,
//! repeat until the turn budget is spent.
//!
//! Two delivery modes share the same turn logic:
//! - **batch**: [`RunConversationUseCase::execute`] returns once every turn ran
//! - **incremental**: [`RunConversationUseCase::steps`] hands out one turn per
//!   pull and computes nothing ahead of its consumer

use crate::config::ConversationParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{ConversationProgress, NoProgress};
use crate::provider::{ProviderRegistry, ProviderReply};
use colloquy_domain::{
    DomainError, Participant, PromptTemplate, Topic, Transcript, TranscriptEntry, TurnReport,
    TurnScheduler, UsageAccountant, UsageRecord, UsageSummary,
};
use futures::Stream;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur before a conversation starts
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RunConversationError {
    #[error("Invalid lineup: {0}")]
    InvalidLineup(#[from] DomainError),
}

/// Input for the RunConversation use case
#[derive(Debug, Clone)]
pub struct RunConversationInput {
    /// Subject the first speaker introduces
    pub topic: Topic,
    /// Speakers in rotation order
    pub participants: Vec<Participant>,
    /// Turn budget, pacing and accounting
    pub params: ConversationParams,
    /// External interruption of the whole run
    pub cancellation: Option<CancellationToken>,
}

impl RunConversationInput {
    pub fn new(topic: impl Into<Topic>, participants: Vec<Participant>) -> Self {
        Self {
            topic: topic.into(),
            participants,
            params: ConversationParams::default(),
            cancellation: None,
        }
    }

    pub fn with_params(mut self, params: ConversationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.params = self.params.with_max_turns(max_turns);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    fn validate(&self) -> Result<(), RunConversationError> {
        TurnScheduler::check_lineup(&self.participants, self.params.max_turns)?;
        Ok(())
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationStatus {
    Running,
    Completed,
    Interrupted,
}

/// Result of a finished (or interrupted) run
#[derive(Debug, Clone)]
pub struct ConversationOutcome {
    pub transcript: Transcript,
    pub status: ConversationStatus,
    /// Totals, when accounting was enabled
    pub usage: Option<UsageSummary>,
    pub usage_records: Vec<UsageRecord>,
}

impl ConversationOutcome {
    pub fn turns_executed(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_interrupted(&self) -> bool {
        self.status == ConversationStatus::Interrupted
    }
}

/// Use case for running a round-robin conversation
pub struct RunConversationUseCase {
    providers: Arc<ProviderRegistry>,
    logger: Arc<dyn ConversationLogger>,
}

impl RunConversationUseCase {
    pub fn new(providers: Arc<ProviderRegistry>) -> Self {
        Self {
            providers,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Record every turn to a structured conversation log
    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunConversationInput,
    ) -> Result<ConversationOutcome, RunConversationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute all turns, reporting each one through `progress`
    ///
    /// Pacing is not applied in batch mode.
    pub async fn execute_with_progress(
        &self,
        input: RunConversationInput,
        progress: &dyn ConversationProgress,
    ) -> Result<ConversationOutcome, RunConversationError> {
        let mut steps = self.start(input, Duration::ZERO)?;

        progress.on_run_start(steps.participants(), steps.max_turns());

        loop {
            if let Some(speaker) = steps.upcoming_speaker() {
                progress.on_turn_start(steps.turns_taken(), speaker);
            }
            match steps.next_turn().await {
                Some(report) => progress.on_turn_complete(&report),
                None => break,
            }
        }

        let outcome = steps.finish();
        progress.on_run_complete(&outcome.transcript, outcome.usage.as_ref());
        Ok(outcome)
    }

    /// Start an incremental run
    ///
    /// Each [`ConversationSteps::next_turn`] call runs exactly one turn,
    /// after the configured pacing delay.
    pub fn steps(
        &self,
        input: RunConversationInput,
    ) -> Result<ConversationSteps, RunConversationError> {
        let pacing = input.params.pacing;
        self.start(input, pacing)
    }

    fn start(
        &self,
        input: RunConversationInput,
        pacing: Duration,
    ) -> Result<ConversationSteps, RunConversationError> {
        input.validate()?;

        info!(
            "Starting conversation with {} participants for {} turns",
            input.participants.len(),
            input.params.max_turns
        );

        let lineup: Vec<serde_json::Value> = input
            .participants
            .iter()
            .map(|p| {
                json!({
                    "name": p.name(),
                    "role": p.role().as_str(),
                    "provider": p.provider().as_str(),
                    "model": p.model().as_str(),
                })
            })
            .collect();

        self.logger.log(ConversationEvent::new(
            "run_started",
            json!({
                "topic": input.topic.content(),
                "max_turns": input.params.max_turns,
                "accounting": input.params.accounting_enabled(),
                "participants": lineup,
            }),
        ));

        Ok(ConversationSteps {
            providers: Arc::clone(&self.providers),
            logger: Arc::clone(&self.logger),
            topic: input.topic,
            participants: input.participants,
            max_turns: input.params.max_turns,
            pacing,
            cancellation: input.cancellation.unwrap_or_default(),
            transcript: Transcript::new(),
            accountant: input.params.pricing.map(UsageAccountant::new),
            turn: 0,
            status: ConversationStatus::Running,
        })
    }
}

/// A conversation driven one turn at a time by its consumer.
///
/// Owns the transcript for the duration of the run. Nothing happens
/// between calls to [`next_turn`](Self::next_turn).
pub struct ConversationSteps {
    providers: Arc<ProviderRegistry>,
    logger: Arc<dyn ConversationLogger>,
    topic: Topic,
    participants: Vec<Participant>,
    max_turns: usize,
    pacing: Duration,
    cancellation: CancellationToken,
    transcript: Transcript,
    accountant: Option<UsageAccountant>,
    turn: usize,
    status: ConversationStatus,
}

impl ConversationSteps {
    /// Transcript so far
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn turns_taken(&self) -> usize {
        self.turn
    }

    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    pub fn usage(&self) -> Option<UsageSummary> {
        self.accountant.as_ref().map(UsageAccountant::summary)
    }

    pub fn is_finished(&self) -> bool {
        self.status != ConversationStatus::Running
    }

    /// Who speaks on the next call, if there is one
    pub fn upcoming_speaker(&self) -> Option<&Participant> {
        if self.is_finished() || self.turn >= self.max_turns {
            return None;
        }
        TurnScheduler::next_speaker(self.turn, &self.participants)
    }

    /// Run the next turn.
    ///
    /// Returns `None` once the turn budget is spent or the run was
    /// interrupted. Provider failures do not end the run; they come back
    /// as a report whose content is the sentinel error text.
    pub async fn next_turn(&mut self) -> Option<TurnReport> {
        if self.is_finished() {
            return None;
        }
        if self.turn >= self.max_turns {
            self.complete();
            return None;
        }
        if self.cancellation.is_cancelled() {
            self.interrupt();
            return None;
        }

        let cancellation = self.cancellation.clone();

        if self.turn > 0 && !self.pacing.is_zero() {
            let pacing = self.pacing;
            let paced = tokio::select! {
                biased;
                _ = cancellation.cancelled() => false,
                _ = tokio::time::sleep(pacing) => true,
            };
            if !paced {
                self.interrupt();
                return None;
            }
        }

        let speaker = TurnScheduler::next_speaker(self.turn, &self.participants)?.clone();
        let prompt = PromptTemplate::build(&speaker, &self.transcript, &self.topic);

        debug!(
            "Turn {}: {} ({} via {})",
            self.turn,
            speaker.name(),
            speaker.model(),
            speaker.provider()
        );
        debug!("Prompt for {}:\n{}", speaker.name(), prompt.user);

        let providers = Arc::clone(&self.providers);
        let reply = match providers.client_for(speaker.provider()) {
            Some(client) => tokio::select! {
                biased;
                _ = cancellation.cancelled() => None,
                reply = client.send(speaker.model(), prompt.into_messages(), speaker.sampling()) => Some(reply),
            },
            None => {
                warn!(
                    "No {} provider configured for {}",
                    speaker.provider(),
                    speaker.name()
                );
                Some(ProviderReply::failure(
                    speaker.model(),
                    format!("no {} provider configured", speaker.provider()),
                ))
            }
        };

        let Some(reply) = reply else {
            self.interrupt();
            return None;
        };

        let entry = TranscriptEntry::new(speaker.name(), reply.text);
        self.transcript.push(entry.clone());

        let usage = match (self.accountant.as_mut(), reply.usage) {
            (Some(accountant), Some(tokens)) => {
                accountant.record(
                    speaker.model().as_str(),
                    tokens.input_tokens,
                    tokens.output_tokens,
                );
                accountant.last().cloned()
            }
            _ => None,
        };

        let report = TurnReport {
            index: self.turn,
            entry,
            model: speaker.model().to_string(),
            usage,
            failed: reply.failed,
        };

        info!(
            "Turn {}/{} by {} complete{}",
            self.turn + 1,
            self.max_turns,
            speaker.name(),
            if report.failed { " (provider error)" } else { "" }
        );

        self.logger.log(ConversationEvent::new(
            "turn_completed",
            json!({
                "turn": report.index,
                "speaker": report.entry.speaker,
                "model": report.model,
                "message": report.entry.content,
                "failed": report.failed,
                "usage": report.usage,
            }),
        ));

        self.turn += 1;
        if self.turn >= self.max_turns {
            self.complete();
        }

        Some(report)
    }

    /// Expose the remaining turns as a stream.
    pub fn into_stream(self) -> impl Stream<Item = TurnReport> + Send {
        futures::stream::unfold(self, |mut steps| async move {
            let report = steps.next_turn().await?;
            Some((report, steps))
        })
    }

    /// Stop and hand back the transcript.
    ///
    /// A run abandoned before its last turn counts as interrupted.
    pub fn finish(mut self) -> ConversationOutcome {
        if self.status == ConversationStatus::Running {
            if self.turn >= self.max_turns {
                self.complete();
            } else {
                self.interrupt();
            }
        }

        let (usage, usage_records) = match self.accountant {
            Some(accountant) => (Some(accountant.summary()), accountant.records().to_vec()),
            None => (None, Vec::new()),
        };

        ConversationOutcome {
            transcript: self.transcript,
            status: self.status,
            usage,
            usage_records,
        }
    }

    fn complete(&mut self) {
        self.status = ConversationStatus::Completed;
        info!("Conversation complete after {} turns", self.transcript.len());
        self.logger.log(ConversationEvent::new(
            "run_completed",
            json!({ "turns": self.transcript.len(), "usage": self.usage() }),
        ));
    }

    fn interrupt(&mut self) {
        self.status = ConversationStatus::Interrupted;
        warn!(
            "Conversation interrupted after {} of {} turns",
            self.transcript.len(),
            self.max_turns
        );
        self.logger.log(ConversationEvent::new(
            "run_interrupted",
            json!({ "turns": self.transcript.len(), "usage": self.usage() }),
        ));
    }
}
