//! Line-oriented question bank parsing.
//!
//! The bank format, per record: prompt line, correct answer line, then one
//! option per line, closed by a blank line or end of input. The option
//! lines may repeat the correct answer; `QuestionRecord` filters it out.

use crate::model::QuestionRecord;

/// Upper bound on questions drawn into a single session.
pub const MAX_SESSION_QUESTIONS: usize = 10;

/// Parse raw bank text into validated question records.
///
/// Blank lines (whitespace-only counts) separate records. Records missing
/// a prompt, a correct answer, or any distractor are dropped without an
/// error. A trailing record not closed by a blank line is still emitted.
///
/// Parsing is pure and deterministic; random sampling of the result is a
/// session concern and happens elsewhere.
#[must_use]
pub fn parse_bank(raw: &str) -> Vec<QuestionRecord> {
    let mut records = Vec::new();
    let mut prompt: Option<&str> = None;
    let mut correct: Option<&str> = None;
    let mut options: Vec<String> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            flush(
                &mut records,
                prompt.take(),
                correct.take(),
                std::mem::take(&mut options),
            );
        } else if prompt.is_none() {
            prompt = Some(line);
        } else if correct.is_none() {
            correct = Some(line);
        } else {
            options.push(line.to_owned());
        }
    }
    flush(&mut records, prompt, correct, options);

    records
}

fn flush(
    records: &mut Vec<QuestionRecord>,
    prompt: Option<&str>,
    correct: Option<&str>,
    options: Vec<String>,
) {
    let (Some(prompt), Some(correct)) = (prompt, correct) else {
        return;
    };
    if let Ok(record) = QuestionRecord::new(prompt, correct, options) {
        records.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_records_with_trailing_record() {
        let records = parse_bank("Q1\nA\nA\nB\nC\n\nQ2\nX\nX\nY\n");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].prompt(), "Q1");
        assert_eq!(records[0].correct_answer(), "A");
        assert_eq!(records[0].distractors(), ["B", "C"]);
        assert_eq!(records[1].prompt(), "Q2");
        assert_eq!(records[1].correct_answer(), "X");
        assert_eq!(records[1].distractors(), ["Y"]);
    }

    #[test]
    fn every_record_satisfies_the_invariants() {
        let records = parse_bank("P\nright\nright\nwrong\n\nonly-prompt\n\nP2\nanswer\n");

        for record in &records {
            assert!(!record.prompt().trim().is_empty());
            assert!(!record.correct_answer().trim().is_empty());
            assert!(!record.distractors().is_empty());
            assert!(!record.distractors().contains(&record.correct_answer().to_owned()));
        }
        // only the first group is complete
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn whitespace_only_lines_act_as_separators() {
        let records = parse_bank("Q1\nA\nB\n   \nQ2\nX\nY");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn incomplete_records_are_dropped_silently() {
        // no options, no answer, and empty input
        assert!(parse_bank("Q\nA\n").is_empty());
        assert!(parse_bank("Q\n").is_empty());
        assert!(parse_bank("").is_empty());
    }

    #[test]
    fn consecutive_blank_lines_are_harmless() {
        let records = parse_bank("\n\nQ1\nA\nB\n\n\n\nQ2\nX\nY\n\n");
        assert_eq!(records.len(), 2);
    }
}
