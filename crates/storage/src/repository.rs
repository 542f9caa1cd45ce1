use std::collections::HashMap;
use std::path::PathBuf;

use quiz_core::model::{Quiz, QuizId};
use thiserror::Error;

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("quiz {0} not found")]
    NotFound(QuizId),

    #[error("duplicate quiz id {0}")]
    Duplicate(QuizId),

    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("invalid quiz {quiz}: {source}")]
    Invalid {
        quiz: QuizId,
        #[source]
        source: quiz_core::Error,
    },
}

/// Read-only access to the quizzes on offer.
pub trait QuizCatalog: Send + Sync {
    /// All quizzes, in catalog order.
    fn list_quizzes(&self) -> Vec<Quiz>;

    /// Fetch a quiz by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no quiz has this id.
    fn get_quiz(&self, id: QuizId) -> Result<Quiz, CatalogError>;
}

/// Catalog held entirely in memory, keeping insertion order for listing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    quizzes: Vec<Quiz>,
    index: HashMap<QuizId, usize>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already validated quizzes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Duplicate` if two quizzes share an id.
    pub fn from_quizzes(quizzes: impl IntoIterator<Item = Quiz>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for quiz in quizzes {
            catalog.insert(quiz)?;
        }
        Ok(catalog)
    }

    /// Add a quiz to the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Duplicate` if the id is already present.
    pub fn insert(&mut self, quiz: Quiz) -> Result<(), CatalogError> {
        if self.index.contains_key(&quiz.id()) {
            return Err(CatalogError::Duplicate(quiz.id()));
        }
        self.index.insert(quiz.id(), self.quizzes.len());
        self.quizzes.push(quiz);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }
}

impl QuizCatalog for InMemoryCatalog {
    fn list_quizzes(&self) -> Vec<Quiz> {
        self.quizzes.clone()
    }

    fn get_quiz(&self, id: QuizId) -> Result<Quiz, CatalogError> {
        self.index
            .get(&id)
            .and_then(|&pos| self.quizzes.get(pos))
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Difficulty, Question, QuestionId};

    fn build_quiz(id: u64) -> Quiz {
        let question = Question::new(
            QuestionId::new(1),
            "Q",
            vec!["a".into(), "b".into()],
            0,
            None,
        )
        .unwrap();
        Quiz::new(
            QuizId::new(id),
            format!("Quiz {id}"),
            "Subject",
            Difficulty::Easy,
            10,
            vec![question],
        )
        .unwrap()
    }

    #[test]
    fn lists_in_insertion_order() {
        let catalog =
            InMemoryCatalog::from_quizzes([build_quiz(3), build_quiz(1), build_quiz(2)]).unwrap();
        let ids: Vec<u64> = catalog
            .list_quizzes()
            .iter()
            .map(|q| q.id().value())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn get_quiz_by_id() {
        let catalog = InMemoryCatalog::from_quizzes([build_quiz(1), build_quiz(2)]).unwrap();
        let quiz = catalog.get_quiz(QuizId::new(2)).unwrap();
        assert_eq!(quiz.title(), "Quiz 2");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = InMemoryCatalog::from_quizzes([build_quiz(1)]).unwrap();
        let err = catalog.get_quiz(QuizId::new(99)).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == QuizId::new(99)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = InMemoryCatalog::from_quizzes([build_quiz(1), build_quiz(1)]).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate(_)));
    }
}
