use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many answers for a single session: {len}")]
    TooManyAnswers { len: usize },

    #[error("score ({score}) does not match correct answers in history ({correct})")]
    ScoreMismatch { score: u32, correct: u32 },

    #[error("history length ({len}) does not match total ({total})")]
    LengthMismatch { total: u32, len: usize },
}

/// Record of a single answered question within a session.
///
/// `question` is the bank index the session cursor resolved to, not the
/// display position; `selected` is the option the user chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: usize,
    pub selected: usize,
    pub correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question: usize, selected: usize, correct: bool, answered_at: DateTime<Utc>) -> Self {
        Self {
            question,
            selected,
            correct,
            answered_at,
        }
    }
}

/// Final tally for a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    score: u32,
    total: u32,
    history: Vec<bool>,
}

impl QuizSummary {
    /// Rebuild a summary from already-derived counts.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, `SummaryError::LengthMismatch` if `history` and `total`
    /// disagree, and `SummaryError::ScoreMismatch` if `score` is not the
    /// number of `true` entries in `history`.
    pub fn from_parts(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        score: u32,
        total: u32,
        history: Vec<bool>,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let len = u32::try_from(history.len())
            .map_err(|_| SummaryError::TooManyAnswers { len: history.len() })?;
        if len != total {
            return Err(SummaryError::LengthMismatch {
                total,
                len: history.len(),
            });
        }
        let correct = u32::try_from(history.iter().filter(|h| **h).count())
            .map_err(|_| SummaryError::TooManyAnswers { len: history.len() })?;
        if correct != score {
            return Err(SummaryError::ScoreMismatch { score, correct });
        }

        Ok(Self {
            started_at,
            completed_at,
            score,
            total,
            history,
        })
    }

    /// Build a summary from the session's answer records.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`. Returns `SummaryError::TooManyAnswers` if the record
    /// count cannot fit in `u32`.
    pub fn from_records(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        records: &[AnswerRecord],
    ) -> Result<Self, SummaryError> {
        let total = u32::try_from(records.len())
            .map_err(|_| SummaryError::TooManyAnswers { len: records.len() })?;
        let history: Vec<bool> = records.iter().map(|r| r.correct).collect();
        let score = u32::try_from(history.iter().filter(|h| **h).count())
            .map_err(|_| SummaryError::TooManyAnswers { len: records.len() })?;

        Self::from_parts(started_at, completed_at, score, total, history)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Number of correctly answered questions.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Per-question correctness, in answer order.
    #[must_use]
    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn summary_counts_correct_answers() {
        let now = fixed_now();
        let records = vec![
            AnswerRecord::new(2, 0, true, now),
            AnswerRecord::new(0, 3, false, now),
            AnswerRecord::new(1, 1, true, now),
        ];

        let summary = QuizSummary::from_records(now, now, &records).unwrap();

        assert_eq!(summary.score(), 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.history(), &[true, false, true]);
    }

    #[test]
    fn empty_session_summary() {
        let now = fixed_now();
        let summary = QuizSummary::from_records(now, now, &[]).unwrap();

        assert_eq!(summary.score(), 0);
        assert_eq!(summary.total(), 0);
        assert!(summary.history().is_empty());
    }

    #[test]
    fn completed_before_started_is_rejected() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(1);

        let result = QuizSummary::from_records(now, earlier, &[]);
        assert_eq!(result, Err(SummaryError::InvalidTimeRange));
    }

    #[test]
    fn score_must_match_history() {
        let now = fixed_now();
        let result = QuizSummary::from_parts(now, now, 3, 2, vec![true, false]);
        assert_eq!(result, Err(SummaryError::ScoreMismatch { score: 3, correct: 1 }));
    }

    #[test]
    fn history_must_match_total() {
        let now = fixed_now();
        let result = QuizSummary::from_parts(now, now, 1, 3, vec![true]);
        assert_eq!(result, Err(SummaryError::LengthMismatch { total: 3, len: 1 }));
    }
}
