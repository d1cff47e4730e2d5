mod bank;
mod question;
mod reference;
mod summary;

pub use bank::QuestionBank;
pub use question::{Question, QuestionDraft, QuestionError};
pub use reference::{Category, Level, ReferenceEntry};
pub use summary::{AnswerRecord, QuizSummary, SummaryError};
