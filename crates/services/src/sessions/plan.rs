use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::bank::MAX_SESSION_QUESTIONS;
use quiz_core::model::QuestionRecord;

/// Questions selected for one session run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    pub questions: Vec<QuestionRecord>,
}

impl SessionPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Draws a random subset of the parsed bank for a session.
#[derive(Debug, Clone, Copy)]
pub struct BankSampler {
    max_questions: usize,
}

impl BankSampler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_questions: MAX_SESSION_QUESTIONS,
        }
    }

    /// Override the session cap (mainly for tests).
    #[must_use]
    pub fn with_max_questions(mut self, max_questions: usize) -> Self {
        self.max_questions = max_questions;
        self
    }

    /// Uniformly shuffle the bank and keep at most the configured cap.
    ///
    /// Emits exactly `min(cap, records.len())` questions. An empty bank
    /// yields an empty plan; the session layer treats that as an
    /// immediately-completed run, not an error.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(
        &self,
        mut records: Vec<QuestionRecord>,
        rng: &mut R,
    ) -> SessionPlan {
        records.shuffle(rng);
        records.truncate(self.max_questions);
        SessionPlan { questions: records }
    }
}

impl Default for BankSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bank(size: usize) -> Vec<QuestionRecord> {
        (0..size)
            .map(|i| {
                QuestionRecord::new(format!("Q{i}"), format!("A{i}"), vec![format!("B{i}")])
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn sampler_caps_large_banks_at_the_maximum() {
        let mut rng = StdRng::seed_from_u64(3);
        let plan = BankSampler::new().sample(bank(25), &mut rng);

        assert_eq!(plan.total(), MAX_SESSION_QUESTIONS);
    }

    #[test]
    fn sampler_returns_whole_bank_when_smaller_than_cap() {
        let mut rng = StdRng::seed_from_u64(3);
        let records = bank(2);
        let plan = BankSampler::new().sample(records.clone(), &mut rng);

        assert_eq!(plan.total(), 2);
        for record in &records {
            assert!(plan.questions.contains(record));
        }
    }

    #[test]
    fn empty_bank_yields_empty_plan() {
        let mut rng = StdRng::seed_from_u64(3);
        let plan = BankSampler::new().sample(Vec::new(), &mut rng);

        assert!(plan.is_empty());
    }

    #[test]
    fn custom_cap_is_honored() {
        let mut rng = StdRng::seed_from_u64(9);
        let plan = BankSampler::new()
            .with_max_questions(4)
            .sample(bank(25), &mut rng);

        assert_eq!(plan.total(), 4);
    }
}
