//! Scoring and review of a completed attempt.
//!
//! Everything here is a pure function of the submitted answers, the answer key
//! and the two timestamps; nothing reads the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Question, Quiz, QuizId, SessionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("expected {expected} answers, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("answer {answer} for question {index} is out of range for {len} options")]
    AnswerOutOfRange {
        index: usize,
        answer: usize,
        len: usize,
    },

    #[error("report belongs to quiz {report}, not quiz {quiz}")]
    QuizMismatch { report: QuizId, quiz: QuizId },
}

/// Percentage of correct answers, rounded half-up to an integer in `0..=100`.
///
/// `total` must be non-zero; a quiz cannot be constructed without questions.
#[must_use]
pub fn score_percent(correct: usize, total: usize) -> u8 {
    debug_assert!(total > 0, "score of an empty quiz is undefined");
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u128;
    let total = total as u128;
    // round(100 * c / t) == floor((200 * c + t) / (2 * t))
    let rounded = (200 * correct + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Whole seconds between two instants, rounded half-up from milliseconds.
///
/// Negative spans (clock skew) count as zero.
#[must_use]
pub fn elapsed_seconds(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> u64 {
    let millis = (completed_at - started_at).num_milliseconds();
    let millis = u64::try_from(millis).unwrap_or(0);
    millis.saturating_add(500) / 1000
}

//
// ─── REPORT ────────────────────────────────────────────────────────────────────
//

/// Immutable scored outcome of a completed session.
///
/// Holds a copy of the answer key taken at completion time, so later catalog
/// edits cannot change a past result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    session_id: SessionId,
    quiz_id: QuizId,
    score: u8,
    total_questions: usize,
    elapsed_seconds: u64,
    correct_answers: Vec<usize>,
    user_answers: Vec<usize>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl Report {
    /// Score a full set of answers against a quiz.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::LengthMismatch` unless there is exactly one answer per
    /// question and `ReportError::AnswerOutOfRange` if an answer is not a valid option.
    /// A `completed_at` earlier than `started_at` scores an elapsed time of zero.
    pub fn build(
        session_id: SessionId,
        quiz: &Quiz,
        user_answers: Vec<usize>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, ReportError> {
        if user_answers.len() != quiz.len() {
            return Err(ReportError::LengthMismatch {
                expected: quiz.len(),
                actual: user_answers.len(),
            });
        }
        for (index, (question, &answer)) in quiz.questions().iter().zip(&user_answers).enumerate() {
            if answer >= question.option_count() {
                return Err(ReportError::AnswerOutOfRange {
                    index,
                    answer,
                    len: question.option_count(),
                });
            }
        }

        let correct_answers = quiz.answer_key();
        let correct = count_matches(&correct_answers, &user_answers);

        Ok(Self {
            session_id,
            quiz_id: quiz.id(),
            score: score_percent(correct, quiz.len()),
            total_questions: quiz.len(),
            elapsed_seconds: elapsed_seconds(started_at, completed_at),
            correct_answers,
            user_answers,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    /// Percentage score, `0..=100`.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn correct_answers(&self) -> &[usize] {
        &self.correct_answers
    }

    #[must_use]
    pub fn user_answers(&self) -> &[usize] {
        &self.user_answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        count_matches(&self.correct_answers, &self.user_answers)
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> Option<bool> {
        let user = self.user_answers.get(index)?;
        let correct = self.correct_answers.get(index)?;
        Some(user == correct)
    }

    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Pair each recorded answer with its question for display.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::QuizMismatch` if `quiz` is not the quiz this report was
    /// produced from, or `ReportError::LengthMismatch` if its question count changed.
    pub fn review<'q>(&self, quiz: &'q Quiz) -> Result<Vec<ReviewItem<'q>>, ReportError> {
        if quiz.id() != self.quiz_id {
            return Err(ReportError::QuizMismatch {
                report: self.quiz_id,
                quiz: quiz.id(),
            });
        }
        if quiz.len() != self.total_questions {
            return Err(ReportError::LengthMismatch {
                expected: self.total_questions,
                actual: quiz.len(),
            });
        }

        Ok(quiz
            .questions()
            .iter()
            .zip(self.user_answers.iter().zip(&self.correct_answers))
            .enumerate()
            .map(|(index, (question, (&user_answer, &correct_answer)))| ReviewItem {
                index,
                question,
                user_answer,
                correct_answer,
                is_correct: user_answer == correct_answer,
            })
            .collect())
    }
}

fn count_matches(correct: &[usize], user: &[usize]) -> usize {
    correct
        .iter()
        .zip(user)
        .filter(|(expected, given)| expected == given)
        .count()
}

//
// ─── REVIEW ────────────────────────────────────────────────────────────────────
//

/// One question of a completed attempt, as recorded in the report.
///
/// `correct_answer` comes from the report snapshot, not from `question`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewItem<'q> {
    pub index: usize,
    pub question: &'q Question,
    pub user_answer: usize,
    pub correct_answer: usize,
    pub is_correct: bool,
}

impl<'q> ReviewItem<'q> {
    #[must_use]
    pub fn user_answer_text(&self) -> Option<&'q str> {
        self.question.option(self.user_answer)
    }

    #[must_use]
    pub fn correct_answer_text(&self) -> Option<&'q str> {
        self.question.option(self.correct_answer)
    }
}

//
// ─── SCORE BAND ────────────────────────────────────────────────────────────────
//

/// Coarse grading of a percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 90 and above.
    Excellent,
    /// 80–89.
    Good,
    /// 70–79.
    Fair,
    /// Below 70.
    NeedsWork,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            80..=89 => Self::Good,
            70..=79 => Self::Fair,
            _ => Self::NeedsWork,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::NeedsWork => "needs work",
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
