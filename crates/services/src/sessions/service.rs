use chrono::{DateTime, Utc};
use rand::Rng;

use quiz_core::model::{QuestionRecord, Tally};

use super::answers::shuffled_answers;
use super::plan::SessionPlan;
use super::progress::SessionProgress;
use crate::error::SessionError;

/// In-memory state machine for one run through a sampled question set.
///
/// The session owns its question order and results exclusively; a restart
/// replaces the whole value. A session built from an empty plan is complete
/// from the start with a 0/0 tally, which is a defined degenerate case and
/// not an error.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    current: usize,
    results: Vec<bool>,
    current_answers: Vec<String>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session over the planned questions.
    ///
    /// `started_at` should come from the services layer clock. The first
    /// question's answer order is drawn immediately.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        plan: SessionPlan,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Self {
        let questions = plan.questions;
        let current_answers = questions
            .first()
            .map(|q| shuffled_answers(q, rng))
            .unwrap_or_default();
        let completed_at = questions.is_empty().then_some(started_at);

        Self {
            questions,
            current: 0,
            results: Vec::new(),
            current_answers,
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// One boolean per answered question, in submission order.
    #[must_use]
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// The question currently awaiting an answer.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current)
    }

    /// Answer order for the current question, drawn when it was entered.
    #[must_use]
    pub fn current_answers(&self) -> &[String] {
        &self.current_answers
    }

    /// Compare the selection to the active question, record the outcome,
    /// and advance.
    ///
    /// Entering the next question redraws its answer order; answering the
    /// last question completes the session at `answered_at`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if no question is awaiting an
    /// answer.
    pub fn submit_answer<R: Rng + ?Sized>(
        &mut self,
        selected: &str,
        answered_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<bool, SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        let correct = question.is_correct(selected);

        self.results.push(correct);
        self.current += 1;
        match self.questions.get(self.current) {
            Some(next) => self.current_answers = shuffled_answers(next, rng),
            None => {
                self.current_answers.clear();
                self.completed_at = Some(answered_at);
            }
        }

        Ok(correct)
    }

    /// Correct answers over questions answered so far.
    #[must_use]
    pub fn tally(&self) -> Tally {
        let correct = self.results.iter().filter(|r| **r).count();
        Tally::new(
            u32::try_from(correct).unwrap_or(u32::MAX),
            u32::try_from(self.results.len()).unwrap_or(u32::MAX),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn plan(size: usize) -> SessionPlan {
        let questions = (0..size)
            .map(|i| {
                QuestionRecord::new(format!("Q{i}"), format!("A{i}"), vec![format!("B{i}")])
                    .unwrap()
            })
            .collect();
        SessionPlan { questions }
    }

    #[test]
    fn results_track_each_submission_in_order() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new(plan(3), fixed_now(), &mut rng);

        let first = session.current_question().unwrap().correct_answer().to_owned();
        assert!(session.submit_answer(&first, fixed_now(), &mut rng).unwrap());
        assert!(!session.submit_answer("wrong", fixed_now(), &mut rng).unwrap());
        let third = session.current_question().unwrap().correct_answer().to_owned();
        assert!(session.submit_answer(&third, fixed_now(), &mut rng).unwrap());

        assert_eq!(session.results(), [true, false, true]);
        assert_eq!(session.tally(), Tally::new(2, 3));
        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn answer_order_is_redrawn_when_the_same_question_is_reentered() {
        // same question twice, so both activations show identical options
        let question = QuestionRecord::new(
            "Q",
            "A",
            vec!["B".into(), "C".into(), "D".into(), "E".into(), "F".into()],
        )
        .unwrap();
        let plan = SessionPlan {
            questions: vec![question.clone(), question],
        };
        let mut rng = StdRng::seed_from_u64(5);

        let mut differed = false;
        for _ in 0..20 {
            let mut session = QuizSession::new(plan.clone(), fixed_now(), &mut rng);
            let first = session.current_answers().to_vec();
            session.submit_answer("A", fixed_now(), &mut rng).unwrap();
            let second = session.current_answers().to_vec();

            assert_eq!(first.len(), second.len());
            if first != second {
                differed = true;
            }
        }
        assert!(differed, "reentering a question must draw a fresh order");
    }

    #[test]
    fn empty_plan_completes_immediately_with_zero_tally() {
        let mut rng = StdRng::seed_from_u64(5);
        let session = QuizSession::new(plan(0), fixed_now(), &mut rng);

        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(fixed_now()));
        assert_eq!(session.tally(), Tally::new(0, 0));
        assert!(session.current_question().is_none());
        assert!(session.current_answers().is_empty());
    }

    #[test]
    fn submitting_after_completion_is_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new(plan(1), fixed_now(), &mut rng);

        session.submit_answer("x", fixed_now(), &mut rng).unwrap();
        let err = session.submit_answer("x", fixed_now(), &mut rng).unwrap_err();

        assert!(matches!(err, SessionError::Completed));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn progress_reflects_position() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = QuizSession::new(plan(2), fixed_now(), &mut rng);

        let before = session.progress();
        assert_eq!((before.total, before.answered, before.remaining), (2, 0, 2));
        assert!(!before.is_complete);

        session.submit_answer("x", fixed_now(), &mut rng).unwrap();
        let mid = session.progress();
        assert_eq!((mid.total, mid.answered, mid.remaining), (2, 1, 1));

        session.submit_answer("x", fixed_now(), &mut rng).unwrap();
        assert!(session.progress().is_complete);
        assert_eq!(session.progress().remaining, 0);
    }
}
