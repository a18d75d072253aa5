use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("correct answer is empty")]
    EmptyAnswer,

    #[error("question has no distractors")]
    NoDistractors,
}

/// One multiple-choice question: a prompt, its correct answer, and the
/// incorrect options (distractors) shown alongside it.
///
/// Immutable once built. Presentation order is a separate per-activation
/// concern; see the answer shuffling in the services crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    prompt: String,
    correct_answer: String,
    distractors: Vec<String>,
}

impl QuestionRecord {
    /// Build a validated question.
    ///
    /// Options equal to the correct answer are dropped, so `distractors`
    /// never contains the correct answer even when the bank file repeats it
    /// among the options.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyAnswer`
    /// for blank fields, and `QuestionError::NoDistractors` when no
    /// incorrect option remains.
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let correct_answer = correct_answer.into();
        if correct_answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }

        let distractors: Vec<String> = options
            .into_iter()
            .filter(|option| *option != correct_answer)
            .collect();
        if distractors.is_empty() {
            return Err(QuestionError::NoDistractors);
        }

        Ok(Self {
            prompt,
            correct_answer,
            distractors,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn distractors(&self) -> &[String] {
        &self.distractors
    }

    /// Number of options shown to the player (distractors plus the correct
    /// answer).
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.distractors.len() + 1
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }
}
