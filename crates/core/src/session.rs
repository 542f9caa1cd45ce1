use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::{Question, Quiz, SessionId};
use crate::scoring::{Report, ReportError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    NoPendingSelection,
    AtFirstQuestion,
    AlreadyComplete,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::NoPendingSelection => f.write_str("no answer selected"),
            TransitionError::AtFirstQuestion => f.write_str("already at the first question"),
            TransitionError::AlreadyComplete => f.write_str("session already completed"),
        }
    }
}

/// Errors emitted by session transitions. A failed transition never changes the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("option {option} is out of range for {len} options")]
    InvalidOption { option: usize, len: usize },

    #[error("invalid transition: {0}")]
    InvalidTransition(TransitionError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Complete,
}

/// Outcome of a successful [`Session::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at `index`.
    Next { index: usize },
    /// The final answer was submitted and scored.
    Completed(Report),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a quiz.
///
/// Steps through the questions in order. Answers are committed by `advance`,
/// so while the session is in progress `answers().len() == current_index()`.
/// The final `advance` scores the attempt once; the report stays attached to the
/// session and every later mutation is rejected.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    quiz: Quiz,
    current: usize,
    answers: Vec<usize>,
    pending: Option<usize>,
    started_at: DateTime<Utc>,
    status: SessionStatus,
    report: Option<Report>,
}

impl Session {
    /// Begin an attempt at `quiz`.
    ///
    /// `started_at` should come from the caller's clock; elapsed time is measured
    /// against it when the attempt completes.
    #[must_use]
    pub fn start(quiz: Quiz, started_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new_v4(),
            answers: Vec::with_capacity(quiz.len()),
            quiz,
            current: 0,
            pending: None,
            started_at,
            status: SessionStatus::InProgress,
            report: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question being shown; after completion this is the last question.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.question(self.current)
    }

    /// Submitted answers, in question order.
    #[must_use]
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    #[must_use]
    pub fn pending_selection(&self) -> Option<usize> {
        self.pending
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.quiz.len()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.is_complete() && self.current > 0
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_complete() && self.pending.is_some()
    }

    /// The report produced on completion.
    #[must_use]
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    /// Choose an option for the current question without committing it.
    ///
    /// Replaces any earlier pending choice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidOption` if `option` is not an option of the
    /// current question, or `InvalidTransition` if the session is complete.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        let len = self
            .current_question()
            .map_or(0, Question::option_count);
        if option >= len {
            return Err(SessionError::InvalidOption { option, len });
        }
        self.pending = Some(option);
        Ok(())
    }

    /// Step back one question.
    ///
    /// The answer previously submitted for that question is dropped and the
    /// pending selection is cleared; it is not restored from the old answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` at the first question or once complete.
    pub fn go_to_previous(&mut self) -> Result<(), SessionError> {
        self.ensure_in_progress()?;
        if self.current == 0 {
            return Err(SessionError::InvalidTransition(
                TransitionError::AtFirstQuestion,
            ));
        }
        self.current -= 1;
        self.answers.truncate(self.current);
        self.pending = None;
        Ok(())
    }

    /// Commit the pending selection and move on, or finish and score the attempt
    /// when this is the last question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` without a pending selection or once
    /// complete. Returns `SessionError::Report` if scoring fails, which the
    /// session invariants rule out.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, SessionError> {
        self.ensure_in_progress()?;
        let Some(selected) = self.pending else {
            return Err(SessionError::InvalidTransition(
                TransitionError::NoPendingSelection,
            ));
        };

        if self.is_last_question() {
            let mut answers = self.answers.clone();
            answers.push(selected);
            let report = Report::build(self.id, &self.quiz, answers.clone(), self.started_at, now)?;

            self.answers = answers;
            self.pending = None;
            self.status = SessionStatus::Complete;
            self.report = Some(report.clone());
            return Ok(Advance::Completed(report));
        }

        self.answers.push(selected);
        self.current += 1;
        self.pending = None;
        Ok(Advance::Next {
            index: self.current,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::InProgress => Ok(()),
            SessionStatus::Complete => Err(SessionError::InvalidTransition(
                TransitionError::AlreadyComplete,
            )),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
