#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod scoring;
pub mod session;
pub mod time;

pub use error::Error;
pub use model::{Difficulty, Question, QuestionId, Quiz, QuizId, SessionId};
pub use scoring::{Report, ReviewItem, ScoreBand};
pub use session::{Advance, Session, SessionError, SessionStatus, TransitionError};
pub use time::Clock;
