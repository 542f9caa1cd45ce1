use std::collections::{HashSet, VecDeque};

use quiz_core::scoring::Report;

/// Number of completed reports kept by default.
pub const DEFAULT_ATTEMPT_CAPACITY: usize = 50;

/// Summary figures over the archived attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttemptStats {
    pub taken: usize,
    /// Mean score rounded half-up; `None` when nothing has been taken.
    pub average_score: Option<u8>,
    pub best_score: Option<u8>,
    pub distinct_quizzes: usize,
}

/// In-memory archive of completed reports, newest last.
///
/// Bounded: once `capacity` reports are held, recording another evicts the oldest.
/// Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct AttemptLog {
    capacity: usize,
    reports: VecDeque<Report>,
}

impl Default for AttemptLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ATTEMPT_CAPACITY)
    }
}

impl AttemptLog {
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            reports: VecDeque::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&mut self, report: Report) {
        if self.reports.len() == self.capacity {
            self.reports.pop_front();
        }
        self.reports.push_back(report);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Reports from newest to oldest.
    pub fn recent(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter().rev()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Report> {
        self.reports.back()
    }

    #[must_use]
    pub fn stats(&self) -> AttemptStats {
        let taken = self.reports.len();
        if taken == 0 {
            return AttemptStats::default();
        }

        let sum: u64 = self.reports.iter().map(|r| u64::from(r.score())).sum();
        let n = taken as u64;
        let average = u8::try_from((2 * sum + n) / (2 * n)).unwrap_or(100);
        let best = self.reports.iter().map(Report::score).max();
        let distinct_quizzes = self
            .reports
            .iter()
            .map(Report::quiz_id)
            .collect::<HashSet<_>>()
            .len();

        AttemptStats {
            taken,
            average_score: Some(average),
            best_score: best,
            distinct_quizzes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Difficulty, Question, QuestionId, Quiz, QuizId, SessionId};
    use quiz_core::time::fixed_now;

    fn report(quiz_id: u64, answers: &[usize]) -> Report {
        // Answer key is all zeros, so each 0 answer is correct.
        let questions = (0..answers.len())
            .map(|i| {
                Question::new(
                    QuestionId::new(i as u64),
                    "Q",
                    vec!["a".into(), "b".into()],
                    0,
                    None,
                )
                .unwrap()
            })
            .collect();
        let quiz = Quiz::new(
            QuizId::new(quiz_id),
            "T",
            "S",
            Difficulty::Easy,
            5,
            questions,
        )
        .unwrap();
        Report::build(
            SessionId::new_v4(),
            &quiz,
            answers.to_vec(),
            fixed_now(),
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn empty_log_has_no_scores() {
        let log = AttemptLog::default();
        assert_eq!(log.capacity(), DEFAULT_ATTEMPT_CAPACITY);
        assert_eq!(log.stats(), AttemptStats::default());
        assert!(log.latest().is_none());
    }

    #[test]
    fn stats_average_best_and_distinct() {
        let mut log = AttemptLog::default();
        log.record(report(1, &[0, 0])); // 100
        log.record(report(1, &[0, 1])); // 50
        log.record(report(2, &[0, 1, 1])); // 33

        let stats = log.stats();
        assert_eq!(stats.taken, 3);
        assert_eq!(stats.average_score, Some(61)); // 183 / 3
        assert_eq!(stats.best_score, Some(100));
        assert_eq!(stats.distinct_quizzes, 2);
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut log = AttemptLog::with_capacity(2);
        log.record(report(1, &[0]));
        log.record(report(2, &[0]));
        log.record(report(3, &[1]));

        assert_eq!(log.len(), 2);
        let ids: Vec<u64> = log.recent().map(|r| r.quiz_id().value()).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn zero_capacity_keeps_latest() {
        let mut log = AttemptLog::with_capacity(0);
        log.record(report(1, &[0]));
        log.record(report(2, &[0]));
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().unwrap().quiz_id(), QuizId::new(2));
    }
}
