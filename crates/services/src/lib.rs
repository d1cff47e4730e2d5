#![forbid(unsafe_code)]

pub mod error;
pub mod reference_service;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use reference_service::ReferenceService;
pub use sessions::{QuizService, QuizSession, SessionOutcome, SessionProgress, shuffled_order};
