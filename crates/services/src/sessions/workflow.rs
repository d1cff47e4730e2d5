use std::sync::Arc;

use rand::Rng;

use quiz_core::Clock;
use quiz_core::model::{AnswerRecord, QuestionBank};

use super::service::QuizSession;
use crate::error::SessionError;

/// Outcome of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Continue,
    Completed,
}

/// Hosting layer for quiz sessions: owns the clock and the shared bank.
///
/// The hosting context creates one value per interactive user; every session
/// it hands out is an independently-owned `QuizSession`, so concurrent users
/// never share mutable state. Randomness is consumed only at session start
/// and reset, and callers can supply their own source for deterministic
/// ordering.
#[derive(Debug, Clone)]
pub struct QuizService {
    clock: Clock,
    bank: Arc<QuestionBank>,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>) -> Self {
        Self { clock, bank }
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    /// Start a session with a fresh random order.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        self.start_session_with_rng(&mut rand::rng())
    }

    /// Start a session with a caller-provided random source.
    #[must_use]
    pub fn start_session_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> QuizSession {
        QuizSession::start(Arc::clone(&self.bank), rng, self.clock.now())
    }

    /// Answer the current question, stamping the service clock.
    ///
    /// # Errors
    ///
    /// Propagates the session's rejection untouched; see
    /// [`QuizSession::submit_answer`].
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        option_index: usize,
    ) -> Result<AnswerRecord, SessionError> {
        let record = session.submit_answer(option_index, self.clock.now())?;
        Ok(*record)
    }

    /// Move past the answered question, reporting whether the session is over.
    ///
    /// # Errors
    ///
    /// Propagates the session's rejection untouched; see
    /// [`QuizSession::advance`].
    pub fn advance_current(&self, session: &mut QuizSession) -> Result<SessionOutcome, SessionError> {
        session.advance(self.clock.now())?;
        Ok(if session.is_complete() {
            SessionOutcome::Completed
        } else {
            SessionOutcome::Continue
        })
    }

    /// Restart the session with a fresh random order.
    pub fn reset_session(&self, session: &mut QuizSession) {
        self.reset_session_with_rng(session, &mut rand::rng());
    }

    /// Restart the session with a caller-provided random source.
    pub fn reset_session_with_rng<R: Rng + ?Sized>(&self, session: &mut QuizSession, rng: &mut R) {
        session.reset(rng, self.clock.now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionDraft;
    use quiz_core::time::{fixed_clock, fixed_now};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build_service() -> QuizService {
        let questions = vec![
            QuestionDraft::new("One", ["a", "b"], 0, "").validate().unwrap(),
            QuestionDraft::new("Two", ["a", "b"], 1, "").validate().unwrap(),
        ];
        QuizService::new(fixed_clock(), Arc::new(QuestionBank::new(questions)))
    }

    #[test]
    fn sessions_are_stamped_with_the_service_clock() {
        let service = build_service();
        let mut rng = StdRng::seed_from_u64(3);

        let session = service.start_session_with_rng(&mut rng);
        assert_eq!(session.started_at(), fixed_now());
    }

    #[test]
    fn advancing_past_the_last_question_reports_completion() {
        let service = build_service();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = service.start_session_with_rng(&mut rng);

        service.answer_current(&mut session, 0).unwrap();
        assert_eq!(
            service.advance_current(&mut session).unwrap(),
            SessionOutcome::Continue
        );

        service.answer_current(&mut session, 1).unwrap();
        assert_eq!(
            service.advance_current(&mut session).unwrap(),
            SessionOutcome::Completed
        );
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn reset_hands_back_a_fresh_run() {
        let service = build_service();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = service.start_session_with_rng(&mut rng);

        service.answer_current(&mut session, 0).unwrap();
        service.reset_session_with_rng(&mut session, &mut rng);

        assert!(!session.is_answered());
        assert_eq!(session.score(), 0);
        assert_eq!(session.position(), 0);
    }
}
