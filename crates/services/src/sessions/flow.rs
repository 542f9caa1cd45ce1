use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Quiz, QuizId};
use quiz_core::scoring::Report;
use quiz_core::session::{Advance, Session, SessionError};
use storage::QuizCatalog;
use tracing::{debug, info, warn};

use super::archive::AttemptLog;
use super::progress::SessionProgress;
use crate::Clock;
use crate::error::FlowError;

/// Where the quiz-taking flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    InProgress,
    Complete,
}

/// Result of [`QuizFlow::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next(SessionProgress),
    Completed(Report),
}

/// Drives one quiz attempt at a time: Idle → InProgress → Complete → Idle.
///
/// Owns the active session exclusively. Starting a session replaces whatever
/// was there; `exit` drops it from any state. Completed reports are archived in
/// the attempt log before being handed back.
pub struct QuizFlow {
    clock: Clock,
    catalog: Arc<dyn QuizCatalog>,
    session: Option<Session>,
    attempts: AttemptLog,
}

impl QuizFlow {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn QuizCatalog>) -> Self {
        Self {
            clock,
            catalog,
            session: None,
            attempts: AttemptLog::default(),
        }
    }

    #[must_use]
    pub fn with_attempt_log(mut self, attempts: AttemptLog) -> Self {
        self.attempts = attempts;
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable access to the clock, e.g. to move a fixed clock forward.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[must_use]
    pub fn list_quizzes(&self) -> Vec<Quiz> {
        self.catalog.list_quizzes()
    }

    #[must_use]
    pub fn state(&self) -> FlowState {
        match &self.session {
            None => FlowState::Idle,
            Some(session) if session.is_complete() => FlowState::Complete,
            Some(_) => FlowState::InProgress,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Report of the current session, once it is complete.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        self.session.as_ref().and_then(Session::report)
    }

    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.session.as_ref().map(SessionProgress::of)
    }

    #[must_use]
    pub fn attempts(&self) -> &AttemptLog {
        &self.attempts
    }

    /// Start an attempt at the given quiz, replacing any current session.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NotFound` if the catalog has no such quiz; the current
    /// session is left untouched in that case.
    pub fn start_session(&mut self, quiz_id: QuizId) -> Result<&Session, FlowError> {
        let quiz = self.catalog.get_quiz(quiz_id).inspect_err(|err| {
            warn!(%quiz_id, error = %err, "cannot start quiz");
        })?;

        if let Some(previous) = self.session.take() {
            debug!(session_id = %previous.id(), "replacing session");
        }

        let session = Session::start(quiz, self.clock.now());
        info!(
            session_id = %session.id(),
            %quiz_id,
            questions = session.quiz().len(),
            "quiz started"
        );
        Ok(&*self.session.insert(session))
    }

    /// Pick an option for the current question.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NoSession` when idle, and `FlowError::Session` for an
    /// out-of-range option or a completed session.
    pub fn select_answer(&mut self, option: usize) -> Result<&Session, FlowError> {
        let session = self.active_mut()?;
        if let Err(err) = session.select_answer(option) {
            return Err(rejected(session, err));
        }
        Ok(&*session)
    }

    /// Step back one question.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NoSession` when idle, and `FlowError::Session` at the first
    /// question or after completion.
    pub fn go_to_previous(&mut self) -> Result<&Session, FlowError> {
        let session = self.active_mut()?;
        if let Err(err) = session.go_to_previous() {
            return Err(rejected(session, err));
        }
        debug!(session_id = %session.id(), index = session.current_index(), "went back");
        Ok(&*session)
    }

    /// Commit the pending selection; on the last question, score the attempt.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::NoSession` when idle, and `FlowError::Session` if nothing is
    /// selected or the session is already complete. A completed session's report
    /// is never recomputed.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, FlowError> {
        let now = self.clock.now();
        let session = self.active_mut()?;
        let step = match session.advance(now) {
            Ok(step) => step,
            Err(err) => return Err(rejected(session, err)),
        };

        match step {
            Advance::Next { index } => {
                debug!(session_id = %session.id(), index, "advanced");
                Ok(AdvanceOutcome::Next(SessionProgress::of(session)))
            }
            Advance::Completed(report) => {
                info!(
                    session_id = %report.session_id(),
                    quiz_id = %report.quiz_id(),
                    score = report.score(),
                    correct = report.correct_count(),
                    total = report.total_questions(),
                    elapsed_seconds = report.elapsed_seconds(),
                    "quiz completed"
                );
                self.attempts.record(report.clone());
                Ok(AdvanceOutcome::Completed(report))
            }
        }
    }

    /// Drop the current session, whatever its state. Does nothing when idle.
    pub fn exit(&mut self) {
        if let Some(session) = self.session.take() {
            info!(
                session_id = %session.id(),
                answered = session.answers().len(),
                complete = session.is_complete(),
                "quiz exited"
            );
        }
    }

    fn active_mut(&mut self) -> Result<&mut Session, FlowError> {
        self.session.as_mut().ok_or(FlowError::NoSession)
    }
}

fn rejected(session: &Session, err: SessionError) -> FlowError {
    warn!(session_id = %session.id(), error = %err, "transition rejected");
    FlowError::Session(err)
}

impl fmt::Debug for QuizFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizFlow")
            .field("clock", &self.clock)
            .field("state", &self.state())
            .field("session", &self.session.as_ref().map(Session::id))
            .field("attempts", &self.attempts.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::{Difficulty, Question, QuestionId};
    use quiz_core::session::TransitionError;
    use quiz_core::time::fixed_clock;
    use storage::InMemoryCatalog;

    fn build_quiz(id: u64, key: &[usize]) -> Quiz {
        let questions = key
            .iter()
            .enumerate()
            .map(|(i, &correct)| {
                Question::new(
                    QuestionId::new(i as u64 + 1),
                    format!("Q{}", i + 1),
                    vec!["a".into(), "b".into(), "c".into()],
                    correct,
                    None,
                )
                .unwrap()
            })
            .collect();
        Quiz::new(QuizId::new(id), "Quiz", "Subject", Difficulty::Easy, 10, questions).unwrap()
    }

    fn build_flow() -> QuizFlow {
        let catalog = InMemoryCatalog::from_quizzes([
            build_quiz(1, &[1, 2, 0]),
            build_quiz(2, &[2]),
        ])
        .unwrap();
        QuizFlow::new(fixed_clock(), Arc::new(catalog))
    }

    fn answer(flow: &mut QuizFlow, option: usize) -> AdvanceOutcome {
        flow.select_answer(option).unwrap();
        flow.advance().unwrap()
    }

    #[test]
    fn starts_idle() {
        let flow = build_flow();
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.session().is_none());
        assert!(flow.progress().is_none());
        assert_eq!(flow.list_quizzes().len(), 2);
    }

    #[test]
    fn unknown_quiz_is_not_found() {
        let mut flow = build_flow();
        let err = flow.start_session(QuizId::new(42)).unwrap_err();
        assert!(matches!(err, FlowError::NotFound(id) if id == QuizId::new(42)));
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn runs_to_completion_and_archives_report() {
        let mut flow = build_flow();
        flow.start_session(QuizId::new(1)).unwrap();
        assert_eq!(flow.state(), FlowState::InProgress);

        let AdvanceOutcome::Next(progress) = answer(&mut flow, 1) else {
            panic!("expected next question");
        };
        assert_eq!(progress.position(), 2);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.percent, 67);

        answer(&mut flow, 0);
        flow.clock_mut().advance(Duration::seconds(75));
        let AdvanceOutcome::Completed(report) = answer(&mut flow, 0) else {
            panic!("expected completion");
        };

        assert_eq!(flow.state(), FlowState::Complete);
        assert_eq!(report.score(), 67);
        assert_eq!(report.elapsed_seconds(), 75);
        assert_eq!(flow.report(), Some(&report));
        assert_eq!(flow.attempts().latest(), Some(&report));
    }

    #[test]
    fn completes_after_clock_steps_backwards() {
        let mut flow = build_flow();
        flow.start_session(QuizId::new(2)).unwrap();
        flow.clock_mut().advance(Duration::seconds(-2));

        let AdvanceOutcome::Completed(report) = answer(&mut flow, 2) else {
            panic!("expected completion");
        };
        assert_eq!(flow.state(), FlowState::Complete);
        assert_eq!(report.elapsed_seconds(), 0);
        assert_eq!(flow.attempts().len(), 1);
    }

    #[test]
    fn advance_after_completion_is_rejected_without_rescoring() {
        let mut flow = build_flow();
        flow.start_session(QuizId::new(2)).unwrap();
        let AdvanceOutcome::Completed(report) = answer(&mut flow, 2) else {
            panic!("expected completion");
        };

        flow.clock_mut().advance(Duration::minutes(5));
        let err = flow.advance().unwrap_err();
        assert!(matches!(
            err,
            FlowError::Session(SessionError::InvalidTransition(
                TransitionError::AlreadyComplete
            ))
        ));
        assert_eq!(flow.report(), Some(&report));
        assert_eq!(flow.attempts().len(), 1);
    }

    #[test]
    fn exit_is_idempotent_from_every_state() {
        let mut flow = build_flow();
        flow.exit();
        assert_eq!(flow.state(), FlowState::Idle);

        flow.start_session(QuizId::new(1)).unwrap();
        answer(&mut flow, 1);
        flow.exit();
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.attempts().is_empty());

        flow.start_session(QuizId::new(2)).unwrap();
        answer(&mut flow, 0);
        flow.exit();
        flow.exit();
        assert_eq!(flow.state(), FlowState::Idle);
        assert!(flow.report().is_none());
    }

    #[test]
    fn operations_while_idle_are_rejected() {
        let mut flow = build_flow();
        assert!(matches!(flow.select_answer(0), Err(FlowError::NoSession)));
        assert!(matches!(flow.go_to_previous(), Err(FlowError::NoSession)));
        assert!(matches!(flow.advance(), Err(FlowError::NoSession)));
    }

    #[test]
    fn start_replaces_previous_session() {
        let mut flow = build_flow();
        let first = flow.start_session(QuizId::new(1)).unwrap().id();
        answer(&mut flow, 1);

        let second = flow.start_session(QuizId::new(1)).unwrap();
        assert_ne!(second.id(), first);
        assert_eq!(second.current_index(), 0);
        assert!(second.answers().is_empty());
    }

    #[test]
    fn previous_at_first_question_leaves_state() {
        let mut flow = build_flow();
        flow.start_session(QuizId::new(1)).unwrap();
        flow.select_answer(2).unwrap();

        assert!(flow.go_to_previous().is_err());
        let session = flow.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.pending_selection(), Some(2));
    }

    #[test]
    fn invalid_option_leaves_selection() {
        let mut flow = build_flow();
        flow.start_session(QuizId::new(1)).unwrap();
        flow.select_answer(1).unwrap();
        let err = flow.select_answer(9).unwrap_err();
        assert!(matches!(
            err,
            FlowError::Session(SessionError::InvalidOption { option: 9, len: 3 })
        ));
        assert_eq!(flow.session().unwrap().pending_selection(), Some(1));
    }
}
