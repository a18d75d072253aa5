mod answers;
mod plan;
mod progress;
mod service;

pub use answers::shuffled_answers;
pub use plan::{BankSampler, SessionPlan};
pub use progress::SessionProgress;
pub use service::QuizSession;
