mod question;
mod score;

pub use question::{QuestionError, QuestionRecord};
pub use score::{ScoreEntry, Tally};
