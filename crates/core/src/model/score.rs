use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a finished session: correct answers out of questions asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    correct: u32,
    total: u32,
}

impl Tally {
    #[must_use]
    pub fn new(correct: u32, total: u32) -> Self {
        Self { correct, total }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// One persisted scoreboard entry.
///
/// Fields keep their literal on-disk form so that history round-trips
/// verbatim. The writer always emits zero-padded `YYYY-MM-DD` and
/// `HH:MM:SS`, which makes lexicographic order coincide with chronological
/// order when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    date: String,
    time: String,
    score: String,
}

impl ScoreEntry {
    /// Stamp a finished tally with the given moment.
    #[must_use]
    pub fn from_tally(tally: Tally, at: DateTime<Utc>) -> Self {
        Self {
            date: at.format("%Y-%m-%d").to_string(),
            time: at.format("%H:%M:%S").to_string(),
            score: tally.to_string(),
        }
    }

    /// Rehydrate an entry from already-split fields.
    #[must_use]
    pub fn from_parts(
        date: impl Into<String>,
        time: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            score: score.into(),
        }
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn score(&self) -> &str {
        &self.score
    }

    /// Key for most-recent-first ordering.
    #[must_use]
    pub fn sort_key(&self) -> (&str, &str) {
        (self.date.as_str(), self.time.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn tally_displays_as_fraction() {
        assert_eq!(Tally::new(3, 10).to_string(), "3/10");
        assert_eq!(Tally::new(0, 0).to_string(), "0/0");
    }

    #[test]
    fn entry_from_tally_is_zero_padded() {
        let entry = ScoreEntry::from_tally(Tally::new(7, 10), fixed_now());

        assert_eq!(entry.date(), "2023-11-14");
        assert_eq!(entry.time(), "22:13:20");
        assert_eq!(entry.score(), "7/10");
    }

    #[test]
    fn sort_key_orders_by_date_then_time() {
        let earlier = ScoreEntry::from_parts("2024-01-01", "10:00:00", "3/10");
        let later = ScoreEntry::from_parts("2024-01-02", "09:00:00", "5/10");

        assert!(later.sort_key() > earlier.sort_key());
    }
}
