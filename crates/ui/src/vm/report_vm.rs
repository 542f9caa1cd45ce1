use quiz_core::model::Quiz;
use quiz_core::scoring::{Report, ReportError};

use crate::vm::time_fmt::format_elapsed;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub question: String,
    pub is_correct: bool,
    pub your_answer: String,
    /// Only shown when the answer was wrong.
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

/// Results screen for a completed attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub quiz_title: String,
    pub subject: String,
    pub score: u8,
    pub band: &'static str,
    pub correct: usize,
    pub total: usize,
    pub time_str: String,
    pub items: Vec<ReviewItemVm>,
}

impl ReportVm {
    /// # Errors
    ///
    /// Returns `ReportError` if `quiz` is not the quiz the report was scored against.
    pub fn build(report: &Report, quiz: &Quiz) -> Result<Self, ReportError> {
        let items = report
            .review(quiz)?
            .into_iter()
            .map(|item| ReviewItemVm {
                number: item.index + 1,
                question: item.question.text().to_owned(),
                is_correct: item.is_correct,
                your_answer: item.user_answer_text().unwrap_or_default().to_owned(),
                correct_answer: (!item.is_correct)
                    .then(|| item.correct_answer_text().map(str::to_owned))
                    .flatten(),
                explanation: item.question.explanation().map(str::to_owned),
            })
            .collect();

        Ok(Self {
            quiz_title: quiz.title().to_owned(),
            subject: quiz.subject().to_owned(),
            score: report.score(),
            band: report.band().label(),
            correct: report.correct_count(),
            total: report.total_questions(),
            time_str: format_elapsed(report.elapsed_seconds()),
            items,
        })
    }
}
