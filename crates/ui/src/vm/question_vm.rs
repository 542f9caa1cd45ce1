use quiz_core::session::Session;
use services::SessionProgress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

/// What the question screen of an in-progress session shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub quiz_title: String,
    pub subject: String,
    pub difficulty: &'static str,
    pub position: usize,
    pub total: usize,
    pub progress_percent: u8,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub can_go_back: bool,
    pub can_advance: bool,
    pub next_label: &'static str,
}

impl QuestionVm {
    /// `None` once the session has completed.
    #[must_use]
    pub fn from_session(session: &Session) -> Option<Self> {
        if session.is_complete() {
            return None;
        }
        let question = session.current_question()?;
        let progress = SessionProgress::of(session);
        let pending = session.pending_selection();
        let quiz = session.quiz();

        Some(Self {
            quiz_title: quiz.title().to_owned(),
            subject: quiz.subject().to_owned(),
            difficulty: quiz.difficulty().as_str(),
            position: progress.position(),
            total: progress.total,
            progress_percent: progress.percent,
            text: question.text().to_owned(),
            options: question
                .options()
                .iter()
                .enumerate()
                .map(|(index, text)| OptionVm {
                    index,
                    text: text.clone(),
                    selected: pending == Some(index),
                })
                .collect(),
            can_go_back: session.can_go_back(),
            can_advance: session.can_advance(),
            next_label: if session.is_last_question() {
                "Finish Test"
            } else {
                "Next Question"
            },
        })
    }
}
