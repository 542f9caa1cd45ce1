use std::sync::Arc;

use chrono::Duration;
use quiz_core::QuizId;
use quiz_core::time::fixed_now;
use services::{AdvanceOutcome, Clock, FlowState, QuizFlow};
use storage::{parse_catalog_str, sample_catalog};

#[test]
fn sample_quiz_runs_end_to_end() {
    let mut flow = QuizFlow::new(Clock::fixed(fixed_now()), Arc::new(sample_catalog().unwrap()));
    let quiz_id = flow.list_quizzes()[0].id();
    flow.start_session(quiz_id).unwrap();

    let mut outcome = None;
    for option in [1, 2] {
        flow.select_answer(option).unwrap();
        flow.clock_mut().advance(Duration::seconds(10));
        outcome = Some(flow.advance().unwrap());
        let session = flow.session().unwrap();
        if !session.is_complete() {
            assert_eq!(session.answers().len(), session.current_index());
        }
    }

    let Some(AdvanceOutcome::Completed(report)) = outcome else {
        panic!("expected completion");
    };
    assert_eq!(report.score(), 100);
    assert_eq!(report.elapsed_seconds(), 20);
    assert_eq!(flow.state(), FlowState::Complete);

    flow.exit();
    assert_eq!(flow.state(), FlowState::Idle);
    assert_eq!(flow.attempts().stats().taken, 1);
}

#[test]
fn scores_two_of_three_from_toml_catalog() {
    let catalog = parse_catalog_str(
        r#"
[[quiz]]
id = 10
title = "Mixed"
subject = "General"
difficulty = "easy"
duration_minutes = 5

[[quiz.question]]
id = 1
text = "one"
options = ["a", "b", "c"]
correct_answer = 1

[[quiz.question]]
id = 2
text = "two"
options = ["a", "b", "c"]
correct_answer = 2

[[quiz.question]]
id = 3
text = "three"
options = ["a", "b", "c"]
correct_answer = 0
"#,
    )
    .unwrap();
    let mut flow = QuizFlow::new(Clock::fixed(fixed_now()), Arc::new(catalog));
    flow.start_session(QuizId::new(10)).unwrap();

    let mut last = None;
    for option in [1, 0, 0] {
        flow.select_answer(option).unwrap();
        last = Some(flow.advance().unwrap());
    }

    let Some(AdvanceOutcome::Completed(report)) = last else {
        panic!("expected completion");
    };
    assert_eq!(report.correct_count(), 2);
    assert_eq!(report.score(), 67);
    assert_eq!(report.correct_answers(), &[1, 2, 0]);
    assert_eq!(report.user_answers(), &[1, 0, 0]);
}
