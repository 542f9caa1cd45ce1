use quiz_core::model::Quiz;
use quiz_core::scoring::Report;
use services::AttemptStats;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptStatsVm {
    pub taken: usize,
    pub average_score: Option<u8>,
    pub best_score: Option<u8>,
    pub distinct_quizzes: usize,
}

impl From<AttemptStats> for AttemptStatsVm {
    fn from(stats: AttemptStats) -> Self {
        Self {
            taken: stats.taken,
            average_score: stats.average_score,
            best_score: stats.best_score,
            distinct_quizzes: stats.distinct_quizzes,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentAttemptVm {
    pub quiz_title: String,
    pub score: u8,
    pub band: &'static str,
    pub questions: usize,
    pub completed_at_str: String,
}

/// Map reports to list rows, looking titles up in `quizzes`.
///
/// Reports whose quiz is no longer listed keep a placeholder title.
#[must_use]
pub fn map_recent_attempts<'a>(
    reports: impl IntoIterator<Item = &'a Report>,
    quizzes: &[Quiz],
) -> Vec<RecentAttemptVm> {
    reports
        .into_iter()
        .map(|report| RecentAttemptVm {
            quiz_title: quizzes
                .iter()
                .find(|q| q.id() == report.quiz_id())
                .map_or_else(|| format!("Quiz {}", report.quiz_id()), |q| q.title().to_owned()),
            score: report.score(),
            band: report.band().label(),
            questions: report.total_questions(),
            completed_at_str: format_datetime(report.completed_at()),
        })
        .collect()
}
