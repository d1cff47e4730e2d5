use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

use quiz_core::model::{AnswerRecord, Question, QuestionBank, QuizSummary};

use super::progress::SessionProgress;
use super::shuffle::shuffled_order;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state machine for one run through a shuffled question bank.
///
/// A session steps through the bank in a random order fixed at start. Each
/// question is answered exactly once via [`QuizSession::submit_answer`] and
/// then left behind via [`QuizSession::advance`]; keeping the two operations
/// separate makes the reveal step explicit, so the correct option and the
/// explanation stay visible until the caller moves on.
///
/// `selected` doubles as the answered flag: `None` means the current question
/// is still awaiting an answer.
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    order: Vec<usize>,
    position: usize,
    selected: Option<usize>,
    score: u32,
    records: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a fresh session over `bank` with a newly shuffled order.
    ///
    /// `started_at` should come from the hosting layer clock to keep time
    /// deterministic. An empty bank yields a session that is complete from
    /// the start, with a zero score and empty history.
    #[must_use]
    pub fn start<R: Rng + ?Sized>(
        bank: Arc<QuestionBank>,
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        let order = shuffled_order(bank.len(), rng);
        let completed_at = order.is_empty().then_some(started_at);
        Self {
            bank,
            order,
            position: 0,
            selected: None,
            score: 0,
            records: Vec::new(),
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The shuffled bank indices this session walks through.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of questions already advanced past.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// Count of correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True while the current question has a submitted answer.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// The option chosen for the current question, if it has been answered.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.position,
            total: self.total(),
            answered: self.records.len(),
            is_complete: self.is_complete(),
        }
    }

    fn current_bank_index(&self) -> Result<usize, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        self.order
            .get(self.position)
            .copied()
            .ok_or(SessionError::Completed)
    }

    /// The question at the current cursor position.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the session is over.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        let bank_index = self.current_bank_index()?;
        self.bank.get(bank_index).ok_or(SessionError::Completed)
    }

    /// Record an answer for the current question.
    ///
    /// On success the session stays on the same question so the caller can
    /// show the outcome and explanation; a correct choice increments the
    /// score and every submission appends to the history.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when the session is over,
    /// `SessionError::AlreadyAnswered` on a second submission for the same
    /// question, and `SessionError::OptionOutOfRange` when `option_index`
    /// does not identify an option. A rejected call leaves the session
    /// untouched.
    pub fn submit_answer(
        &mut self,
        option_index: usize,
        answered_at: DateTime<Utc>,
    ) -> Result<&AnswerRecord, SessionError> {
        let bank_index = self.current_bank_index()?;
        if self.selected.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }
        let question = self.bank.get(bank_index).ok_or(SessionError::Completed)?;
        let options = question.option_count();
        if option_index >= options {
            return Err(SessionError::OptionOutOfRange {
                index: option_index,
                options,
            });
        }

        let correct = option_index == question.correct_index();
        self.selected = Some(option_index);
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.records
            .push(AnswerRecord::new(bank_index, option_index, correct, answered_at));

        self.records.last().ok_or(SessionError::Completed)
    }

    /// Move past an answered question.
    ///
    /// The advance that moves the cursor past the last question completes
    /// the session, stamping `completed_at` with `now`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` while the current question is
    /// still awaiting an answer and `SessionError::Completed` once the
    /// session is over.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        if self.selected.is_none() {
            return Err(SessionError::NotAnswered);
        }

        self.position += 1;
        self.selected = None;
        if self.position >= self.order.len() {
            self.completed_at = Some(now);
        }
        Ok(())
    }

    /// Throw away all progress and start over with a fresh shuffle.
    ///
    /// The only operation that is valid in every state. The bank is fixed
    /// for the lifetime of the session value; swapping content means
    /// constructing a new session.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, started_at: DateTime<Utc>) {
        self.order = shuffled_order(self.bank.len(), rng);
        self.position = 0;
        self.selected = None;
        self.score = 0;
        self.records.clear();
        self.started_at = started_at;
        self.completed_at = self.order.is_empty().then_some(started_at);
    }

    /// Final tally for a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn summary(&self) -> Result<QuizSummary, SessionError> {
        let Some(completed_at) = self.completed_at else {
            return Err(SessionError::NotComplete);
        };
        Ok(QuizSummary::from_records(
            self.started_at,
            completed_at,
            &self.records,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("position", &self.position)
            .field("selected", &self.selected)
            .field("score", &self.score)
            .field("records_len", &self.records.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionDraft;
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build_question(correct: usize) -> Question {
        QuestionDraft::new("Pick one", ["A", "B"], correct, "Because.")
            .validate()
            .unwrap()
    }

    /// Bank from the correct indices of its questions, two options each.
    fn build_bank(corrects: &[usize]) -> Arc<QuestionBank> {
        Arc::new(QuestionBank::new(
            corrects.iter().map(|c| build_question(*c)).collect(),
        ))
    }

    fn start(corrects: &[usize]) -> QuizSession {
        let mut rng = StdRng::seed_from_u64(7);
        QuizSession::start(build_bank(corrects), &mut rng, fixed_now())
    }

    #[test]
    fn order_is_a_permutation_of_the_bank() {
        let session = start(&[0, 1, 0, 1, 0, 1, 0, 1, 0, 1]);

        let mut order = session.order().to_vec();
        assert_eq!(order.len(), 10);
        order.sort_unstable();
        assert_eq!(order, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn full_run_scores_questions_whose_first_option_is_correct() {
        // Two of the three questions have option 0 as the correct answer, so
        // always submitting 0 scores 2 regardless of the shuffled order.
        let mut session = start(&[0, 1, 0]);
        let now = fixed_now();

        while !session.is_complete() {
            let record = *session.submit_answer(0, now).unwrap();
            let expected = session.bank().get(record.question).unwrap().correct_index() == 0;
            assert_eq!(record.correct, expected);
            session.advance(now).unwrap();
        }

        assert_eq!(session.score(), 2);
        assert_eq!(session.records().len(), 3);

        let summary = session.summary().unwrap();
        assert_eq!(summary.score(), 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.history().iter().filter(|h| **h).count(), 2);
    }

    #[test]
    fn score_matches_history_at_every_step() {
        let mut session = start(&[1, 0, 1, 1]);
        let now = fixed_now();

        while !session.is_complete() {
            assert_eq!(session.records().len(), session.position());

            session.submit_answer(1, now).unwrap();
            let correct = session
                .records()
                .iter()
                .filter(|r| r.correct)
                .count();
            assert_eq!(session.score() as usize, correct);

            session.advance(now).unwrap();
        }

        assert_eq!(session.records().len(), session.total());
    }

    #[test]
    fn second_submission_is_rejected_without_side_effects() {
        let mut session = start(&[0, 1]);
        let now = fixed_now();

        session.submit_answer(0, now).unwrap();
        let score = session.score();
        let records = session.records().to_vec();

        assert_eq!(session.submit_answer(1, now), Err(SessionError::AlreadyAnswered));
        assert_eq!(session.score(), score);
        assert_eq!(session.records(), records.as_slice());
    }

    #[test]
    fn out_of_range_option_is_rejected_without_side_effects() {
        let mut session = start(&[0]);
        let now = fixed_now();

        let result = session.submit_answer(2, now);
        assert_eq!(
            result,
            Err(SessionError::OptionOutOfRange { index: 2, options: 2 })
        );
        assert!(!session.is_answered());
        assert_eq!(session.score(), 0);
        assert!(session.records().is_empty());

        // The question is still answerable after a rejected index.
        session.submit_answer(0, now).unwrap();
        assert!(session.is_answered());
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = start(&[0, 1]);
        assert_eq!(session.advance(fixed_now()), Err(SessionError::NotAnswered));
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn exactly_n_advances_complete_the_session() {
        let mut session = start(&[0, 0, 0]);
        let now = fixed_now();

        for step in 0..3 {
            assert!(!session.is_complete());
            assert_eq!(session.position(), step);
            session.submit_answer(0, now).unwrap();
            session.advance(now).unwrap();
        }

        assert!(session.is_complete());
        assert_eq!(session.completed_at(), Some(now));
        assert_eq!(session.advance(now), Err(SessionError::Completed));
        assert_eq!(session.submit_answer(0, now), Err(SessionError::Completed));
        assert_eq!(session.current_question(), Err(SessionError::Completed));
    }

    #[test]
    fn empty_bank_starts_complete() {
        let session = start(&[]);

        assert!(session.is_complete());
        assert_eq!(session.current_question(), Err(SessionError::Completed));

        let summary = session.summary().unwrap();
        assert_eq!(summary.score(), 0);
        assert_eq!(summary.total(), 0);
        assert!(summary.history().is_empty());
    }

    #[test]
    fn summary_is_unavailable_while_in_progress() {
        let session = start(&[0, 1]);
        assert_eq!(session.summary().unwrap_err(), SessionError::NotComplete);
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut session = start(&[0, 1, 0]);
        let now = fixed_now();

        while !session.is_complete() {
            session.submit_answer(0, now).unwrap();
            session.advance(now).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(11);
        session.reset(&mut rng, now);

        assert!(!session.is_complete());
        assert!(!session.is_answered());
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.records().is_empty());
        assert_eq!(session.selected_index(), None);

        let mut order = session.order().to_vec();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn progress_reflects_the_reveal_step() {
        let mut session = start(&[0, 1]);
        let now = fixed_now();

        let before = session.progress();
        assert_eq!(before.position, 0);
        assert_eq!(before.answered, 0);
        assert_eq!(before.total, 2);
        assert!(!before.is_complete);

        session.submit_answer(0, now).unwrap();
        let revealed = session.progress();
        assert_eq!(revealed.position, 0);
        assert_eq!(revealed.answered, 1);

        session.advance(now).unwrap();
        let advanced = session.progress();
        assert_eq!(advanced.position, 1);
        assert_eq!(advanced.answered, 1);
    }
}
