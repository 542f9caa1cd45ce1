//! Plain-text rendering of the view models, for terminal front ends.

use std::fmt::Write;

use crate::vm::{AttemptStatsVm, QuestionVm, QuizListItemVm, RecentAttemptVm, ReportVm};

#[must_use]
pub fn render_quiz_list(items: &[QuizListItemVm]) -> String {
    if items.is_empty() {
        return "No quizzes available.\n".to_owned();
    }
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "[{}] {} | {} | {} | {}min | {} questions",
            item.id,
            item.title,
            item.subject,
            item.difficulty,
            item.duration_minutes,
            item.question_count
        );
    }
    out
}

#[must_use]
pub fn render_question(vm: &QuestionVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}, {})", vm.quiz_title, vm.subject, vm.difficulty);
    let _ = writeln!(
        out,
        "Question {} of {} [{}%]",
        vm.position, vm.total, vm.progress_percent
    );
    let _ = writeln!(out, "{}", vm.text);
    for option in &vm.options {
        let marker = if option.selected { '*' } else { ' ' };
        let _ = writeln!(out, " {marker}{}. {}", option.index + 1, option.text);
    }
    out
}

#[must_use]
pub fn render_report(vm: &ReportVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Test Complete! {}", vm.quiz_title);
    let _ = writeln!(out, "Score: {}% ({})", vm.score, vm.band);
    let _ = writeln!(
        out,
        "Correct: {}/{}  Time: {}",
        vm.correct, vm.total, vm.time_str
    );
    let _ = writeln!(out);
    for item in &vm.items {
        let mark = if item.is_correct { "ok" } else { "x " };
        let _ = writeln!(out, "[{mark}] {}. {}", item.number, item.question);
        let _ = writeln!(out, "     Your answer: {}", item.your_answer);
        if let Some(correct) = &item.correct_answer {
            let _ = writeln!(out, "     Correct answer: {correct}");
        }
        if let Some(explanation) = &item.explanation {
            let _ = writeln!(out, "     {explanation}");
        }
    }
    out
}

#[must_use]
pub fn render_stats(stats: &AttemptStatsVm, recent: &[RecentAttemptVm]) -> String {
    let mut out = String::new();
    let average = stats
        .average_score
        .map_or_else(|| "-".to_owned(), |s| format!("{s}%"));
    let _ = writeln!(
        out,
        "Tests taken: {}  Average: {}  Quizzes: {}",
        stats.taken, average, stats.distinct_quizzes
    );
    for attempt in recent {
        let _ = writeln!(
            out,
            "  {:>3}% {} ({} questions, {})",
            attempt.score, attempt.quiz_title, attempt.questions, attempt.band
        );
    }
    out
}
