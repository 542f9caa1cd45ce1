use quiz_core::model::{Difficulty, Question, QuestionId, Quiz, QuizId};
use serde::{Deserialize, Serialize};

use crate::repository::CatalogError;

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct CatalogFile {
    #[serde(default, rename = "quiz")]
    pub quizzes: Vec<QuizRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct QuizRecord {
    pub id: u64,
    pub title: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    #[serde(default, rename = "question")]
    pub questions: Vec<QuestionRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct QuestionRecord {
    pub id: u64,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizRecord {
    pub(crate) fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().value(),
            title: quiz.title().to_owned(),
            subject: quiz.subject().to_owned(),
            difficulty: quiz.difficulty(),
            duration_minutes: quiz.duration_minutes(),
            questions: quiz
                .questions()
                .iter()
                .map(QuestionRecord::from_question)
                .collect(),
        }
    }

    /// Convert the record into a validated domain `Quiz`.
    pub(crate) fn into_quiz(self) -> Result<Quiz, CatalogError> {
        let id = QuizId::new(self.id);
        let invalid = |source: quiz_core::Error| CatalogError::Invalid { quiz: id, source };

        let questions = self
            .questions
            .into_iter()
            .map(|q| q.into_question().map_err(|e| invalid(e.into())))
            .collect::<Result<Vec<_>, _>>()?;

        Quiz::new(
            id,
            self.title,
            self.subject,
            self.difficulty,
            self.duration_minutes,
            questions,
        )
        .map_err(|e| invalid(e.into()))
    }
}

impl QuestionRecord {
    fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().value(),
            text: question.text().to_owned(),
            options: question.options().to_vec(),
            correct_answer: question.correct_answer(),
            explanation: question.explanation().map(str::to_owned),
        }
    }

    fn into_question(self) -> Result<Question, quiz_core::model::QuestionError> {
        Question::new(
            QuestionId::new(self.id),
            self.text,
            self.options,
            self.correct_answer,
            self.explanation,
        )
    }
}
