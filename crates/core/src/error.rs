use thiserror::Error;

use crate::model::{QuestionError, QuizError};
use crate::scoring::ReportError;
use crate::session::SessionError;

/// Any error raised by the core crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
