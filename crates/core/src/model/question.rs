use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors found while validating a question draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {0}")]
    TooFewOptions(usize),

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("correct index {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated multiple-choice question, as supplied by a content source.
///
/// Serde derives let hosts load banks from JSON; the built-in content builds
/// drafts in code. Either way, a draft only becomes a [`Question`] through
/// [`QuestionDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

impl QuestionDraft {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
            explanation: explanation.into(),
        }
    }

    /// Validate the draft into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` for a blank prompt,
    /// `QuestionError::TooFewOptions` for fewer than two options,
    /// `QuestionError::EmptyOption` for a blank option, and
    /// `QuestionError::CorrectIndexOutOfRange` when `correct` does not
    /// identify one of the options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions(self.options.len()));
        }
        if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }
        if self.correct >= self.options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: self.correct,
                options: self.options.len(),
            });
        }

        Ok(Question {
            prompt: self.prompt,
            options: self.options,
            correct: self.correct,
            explanation: self.explanation,
        })
    }
}

/// A validated multiple-choice question.
///
/// Immutable once built; the quiz engine only ever reads it. The invariant
/// `correct < options.len()` is established at validation and relied on by
/// the session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Position of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// Text shown after the question has been answered.
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
