mod archive;
mod flow;
mod progress;

// Public API of the session subsystem.
pub use crate::error::FlowError;
pub use archive::{AttemptLog, AttemptStats, DEFAULT_ATTEMPT_CAPACITY};
pub use flow::{AdvanceOutcome, FlowState, QuizFlow};
pub use progress::SessionProgress;
