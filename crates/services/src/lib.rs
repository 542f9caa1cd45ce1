#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use error::FlowError;
pub use sessions::{
    AdvanceOutcome, AttemptLog, AttemptStats, DEFAULT_ATTEMPT_CAPACITY, FlowState, QuizFlow,
    SessionProgress,
};
