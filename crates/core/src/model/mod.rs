mod ids;
mod question;
mod quiz;

pub use ids::{ParseIdError, QuestionId, QuizId, SessionId};
pub use question::{Question, QuestionError};
pub use quiz::{Difficulty, ParseDifficultyError, Quiz, QuizError};
