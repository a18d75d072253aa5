#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_service;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use quiz_service::{AnswerOutcome, QuizService};
pub use sessions::{BankSampler, QuizSession, SessionPlan, SessionProgress, shuffled_answers};
