//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuizId;
use quiz_core::session::SessionError;
use storage::CatalogError;

/// Errors emitted by `QuizFlow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("quiz {0} not found")]
    NotFound(QuizId),
    #[error("no quiz in progress")]
    NoSession,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Catalog(CatalogError),
}

impl From<CatalogError> for FlowError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => Self::NotFound(id),
            other => Self::Catalog(other),
        }
    }
}
