use quiz_core::scoring::score_percent;
use quiz_core::session::Session;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based index of the question on screen.
    pub index: usize,
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    /// Share of the quiz reached, counting the question on screen, `0..=100`.
    pub percent: u8,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn of(session: &Session) -> Self {
        let total = session.quiz().len();
        let answered = session.answers().len();
        Self {
            index: session.current_index(),
            total,
            answered,
            remaining: total.saturating_sub(answered),
            percent: score_percent(session.current_index() + 1, total),
            is_complete: session.is_complete(),
        }
    }

    /// One-based position for "Question N of M" labels.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index + 1
    }
}
