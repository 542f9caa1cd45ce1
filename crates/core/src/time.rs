use chrono::{DateTime, Duration, Utc};

/// Source of "now" for quiz attempts.
///
/// A session reads the clock exactly twice: `QuizFlow::start_session` stamps
/// `started_at`, and the final `advance` stamps `completed_at`. Nothing ticks in
/// between; elapsed time is the difference of the two stamps, so a fixed clock
/// that tests move by hand gives deterministic reports.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    /// Wall-clock UTC. May step backwards; a completion stamp before the start
    /// stamp still completes the session with zero elapsed seconds.
    #[default]
    System,
    /// Frozen at a timestamp until moved with [`Clock::advance`].
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Move a fixed clock by `delta`, e.g. to simulate time spent on a question.
    /// No effect on `Clock::System`.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Fixed(t) = self {
            *t += delta;
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Deterministic timestamp for tests and examples (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// Falls back to the Unix epoch if the constant were ever unrepresentable.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0).unwrap_or_default()
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
