//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::SummaryError;

/// Errors emitted by the quiz session state machine.
///
/// A rejected operation never mutates the session. `OptionOutOfRange` is an
/// input error the caller should re-prompt for; the transition and state
/// variants indicate a presentation-layer bug, not a user mistake.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("option index {index} is out of range for {options} options")]
    OptionOutOfRange { index: usize, options: usize },

    #[error("current question was already answered")]
    AlreadyAnswered,

    #[error("current question has not been answered yet")]
    NotAnswered,

    #[error("session is already completed")]
    Completed,

    #[error("session is not completed yet")]
    NotComplete,

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

impl SessionError {
    /// True for errors a caller recovers from by asking the user again.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, SessionError::OptionOutOfRange { .. })
    }
}
