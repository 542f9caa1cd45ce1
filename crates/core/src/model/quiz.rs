use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("quiz subject cannot be empty")]
    EmptySubject,

    #[error("quiz duration must be > 0 minutes")]
    InvalidDuration,

    #[error("quiz must contain at least one question")]
    NoQuestions,

    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty tier advertised for a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a difficulty label is not one of `easy`, `medium`, `hard`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {0}")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// An ordered, immutable set of questions offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    title: String,
    subject: String,
    difficulty: Difficulty,
    duration_minutes: u32,
    questions: Vec<Question>,
}

impl Quiz {
    /// Creates a validated quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` if the title or subject is blank, the duration is zero,
    /// there are no questions, or two questions share an id.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        subject: impl Into<String>,
        difficulty: Difficulty,
        duration_minutes: u32,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        let subject = subject.into().trim().to_owned();
        if subject.is_empty() {
            return Err(QuizError::EmptySubject);
        }
        if duration_minutes == 0 {
            return Err(QuizError::InvalidDuration);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuizError::DuplicateQuestion(question.id()));
            }
        }

        Ok(Self {
            id,
            title,
            subject,
            difficulty,
            duration_minutes,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions; always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed quiz; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Correct option index for each question, in order.
    #[must_use]
    pub fn answer_key(&self) -> Vec<usize> {
        self.questions.iter().map(Question::correct_answer).collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
