use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::QuestionRecord;

/// Build the answer list shown for one question activation.
///
/// The distractors are shuffled among themselves, then the correct answer
/// is inserted at an index drawn uniformly over the full resulting length,
/// so it can land anywhere including first or last. Call this each time a
/// question is (re)entered; orderings are never persisted or reused.
#[must_use]
pub fn shuffled_answers<R: Rng + ?Sized>(question: &QuestionRecord, rng: &mut R) -> Vec<String> {
    let mut answers: Vec<String> = question.distractors().to_vec();
    answers.shuffle(rng);
    let slot = rng.random_range(0..=answers.len());
    answers.insert(slot, question.correct_answer().to_owned());
    answers
}
