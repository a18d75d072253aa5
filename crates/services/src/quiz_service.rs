//! Orchestrates bank loading, session flow, and score persistence.

use std::sync::Arc;

use rand::Rng;

use quiz_core::Clock;
use quiz_core::bank::{self, MAX_SESSION_QUESTIONS};
use quiz_core::model::{ScoreEntry, Tally};
use storage::repository::{BankSource, ScoreRepository, StorageError};

use crate::error::SessionError;
use crate::sessions::{BankSampler, QuizSession};

/// Result of submitting one answer through the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub is_complete: bool,
    /// Final tally, present only on the submission that completed the run.
    pub tally: Option<Tally>,
}

/// Front door for the quiz flow: loads and samples the bank, drives the
/// session, and folds finished runs into the scoreboard.
///
/// These methods are the presentation boundary; nothing below this layer
/// knows about a UI toolkit.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    bank: Arc<dyn BankSource>,
    scores: Arc<dyn ScoreRepository>,
    max_questions: usize,
}

impl QuizService {
    #[must_use]
    pub fn new(
        clock: Clock,
        bank: Arc<dyn BankSource>,
        scores: Arc<dyn ScoreRepository>,
    ) -> Self {
        Self {
            clock,
            bank,
            scores,
            max_questions: MAX_SESSION_QUESTIONS,
        }
    }

    /// Override the per-session question cap (mainly for tests).
    #[must_use]
    pub fn with_max_questions(mut self, max_questions: usize) -> Self {
        self.max_questions = max_questions;
        self
    }

    /// Load the bank, sample a fresh subset, and start a session.
    ///
    /// An empty or fully-malformed bank still yields a session; it is born
    /// complete and its 0/0 tally is recorded right away.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` when the bank resource cannot be
    /// loaded. Session start has no fallback question set.
    pub async fn start_session<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<QuizSession, SessionError> {
        let text = self.bank.load_text().await?;
        let records = bank::parse_bank(&text);
        let plan = BankSampler::new()
            .with_max_questions(self.max_questions)
            .sample(records, rng);

        log::debug!("starting session with {} questions", plan.total());
        let session = QuizSession::new(plan, self.clock.now(), rng);
        if session.is_complete() {
            self.record_tally(session.tally());
        }
        Ok(session)
    }

    /// Submit the player's selection for the active question.
    ///
    /// Completing the run appends a score entry stamped from the service
    /// clock. A store that refuses the write is logged and skipped; the
    /// tally still reaches the caller.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session has no active
    /// question.
    pub fn submit_answer<R: Rng + ?Sized>(
        &self,
        session: &mut QuizSession,
        selected: &str,
        rng: &mut R,
    ) -> Result<AnswerOutcome, SessionError> {
        let correct = session.submit_answer(selected, self.clock.now(), rng)?;
        let tally = session.is_complete().then(|| {
            let tally = session.tally();
            self.record_tally(tally);
            tally
        });

        Ok(AnswerOutcome {
            correct,
            is_complete: session.is_complete(),
            tally,
        })
    }

    /// Discard the current session and start over with a fresh sample.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`QuizService::start_session`].
    pub async fn restart<R: Rng + ?Sized>(
        &self,
        session: &mut QuizSession,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        *session = self.start_session(rng).await?;
        Ok(())
    }

    /// Scoreboard view, most recent entry first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the log cannot be read.
    pub fn scoreboard(&self) -> Result<Vec<ScoreEntry>, SessionError> {
        Ok(self.scores.load_sorted()?)
    }

    /// Persist a finished tally; failures are logged, never escalated.
    fn record_tally(&self, tally: Tally) {
        let entry = ScoreEntry::from_tally(tally, self.clock.now());
        if let Err(err) = self.scores.append(&entry) {
            match err {
                StorageError::WriteDenied(_) => {
                    log::warn!("scoreboard not writable, score {tally} not persisted: {err}");
                }
                _ => log::warn!("failed to persist score {tally}: {err}"),
            }
        }
    }
}
