mod progress;
mod service;
mod shuffle;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use shuffle::shuffled_order;
pub use workflow::{QuizService, SessionOutcome};
