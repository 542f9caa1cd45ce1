use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use quiz_core::model::QuizId;
use services::{Clock, FlowState, QuizFlow};
use ui::vm::{AttemptStatsVm, QuestionVm, ReportVm, map_recent_attempts};

use crate::catalog;

pub fn execute(catalog_path: Option<&Path>, quiz_id: u64, json: bool) -> Result<()> {
    let mut flow = QuizFlow::new(Clock::system(), catalog::open_shared(catalog_path)?);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut flow, QuizId::new(quiz_id), stdin.lock(), stdout.lock(), json)
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Choose(usize),
    Previous,
    Exit,
    Unknown,
}

fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(match line.to_ascii_lowercase().as_str() {
        "p" | "prev" | "previous" => Input::Previous,
        "q" | "quit" | "exit" => Input::Exit,
        other => other.parse().map_or(Input::Unknown, Input::Choose),
    })
}

/// Drive one attempt from `input`, one command per line, until it completes or
/// the user exits. End of input counts as exit.
pub fn run<R: BufRead, W: Write>(
    flow: &mut QuizFlow,
    quiz_id: QuizId,
    mut input: R,
    mut out: W,
    json: bool,
) -> Result<()> {
    flow.start_session(quiz_id)?;

    let mut line = String::new();
    while flow.state() == FlowState::InProgress {
        let Some(vm) = flow.session().and_then(QuestionVm::from_session) else {
            break;
        };
        write!(out, "{}> ", ui::render_question(&vm))?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            flow.exit();
            writeln!(out)?;
            writeln!(out, "Exited.")?;
            return Ok(());
        }

        match parse_input(&line) {
            None => {}
            Some(Input::Exit) => {
                flow.exit();
                writeln!(out, "Exited.")?;
                return Ok(());
            }
            Some(Input::Previous) => {
                if let Some(err) = flow.go_to_previous().err() {
                    writeln!(out, "{err}")?;
                }
            }
            Some(Input::Choose(n)) if n == 0 || n > vm.options.len() => {
                writeln!(out, "Choose an option between 1 and {}", vm.options.len())?;
            }
            Some(Input::Choose(n)) => {
                if let Some(err) = flow.select_answer(n - 1).err() {
                    writeln!(out, "{err}")?;
                    continue;
                }
                if let Some(err) = flow.advance().err() {
                    writeln!(out, "{err}")?;
                }
            }
            Some(Input::Unknown) => {
                writeln!(out, "Enter an option number, `p` to go back or `q` to exit")?;
            }
        }
    }

    let Some(session) = flow.session() else {
        return Ok(());
    };
    let Some(report) = session.report() else {
        return Ok(());
    };

    if json {
        serde_json::to_writer_pretty(&mut out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    let vm = ReportVm::build(report, session.quiz())?;
    write!(out, "{}", ui::render_report(&vm))?;

    // History only once there is more than one attempt.
    let attempts = flow.attempts();
    if attempts.len() < 2 {
        return Ok(());
    }
    let stats = AttemptStatsVm::from(attempts.stats());
    let recent = map_recent_attempts(attempts.recent(), &flow.list_quizzes());
    writeln!(out)?;
    write!(out, "{}", ui::render_stats(&stats, &recent))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;
    use std::sync::Arc;
    use storage::sample_catalog;

    fn sample_flow() -> QuizFlow {
        QuizFlow::new(fixed_clock(), Arc::new(sample_catalog().unwrap()))
    }

    fn run_script(flow: &mut QuizFlow, script: &str, json: bool) -> String {
        let mut out = Vec::new();
        run(flow, QuizId::new(1), script.as_bytes(), &mut out, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_inputs() {
        assert_eq!(parse_input(" 2 \n"), Some(Input::Choose(2)));
        assert_eq!(parse_input("P"), Some(Input::Previous));
        assert_eq!(parse_input("exit"), Some(Input::Exit));
        assert_eq!(parse_input("what"), Some(Input::Unknown));
        assert_eq!(parse_input("\n"), None);
    }

    #[test]
    fn perfect_run_scores_100() {
        let mut flow = sample_flow();
        let out = run_script(&mut flow, "2\n3\n", false);
        assert!(out.contains("Question 1 of 2"));
        assert!(out.contains("Question 2 of 2"));
        assert!(out.contains("Score: 100% (excellent)"));
        assert!(!out.contains("Tests taken"));
        assert_eq!(flow.state(), FlowState::Complete);
    }

    #[test]
    fn repeated_attempts_show_history() {
        let mut flow = sample_flow();
        run_script(&mut flow, "2\n3\n", false);
        let out = run_script(&mut flow, "2\n1\n", false);
        assert!(out.contains("Score: 50%"));
        assert!(out.contains("Tests taken: 2  Average: 75"));
    }

    #[test]
    fn back_navigation_reanswers_question() {
        let mut flow = sample_flow();
        let out = run_script(&mut flow, "1\np\n2\n1\n", false);
        assert!(out.contains("Score: 50%"));
        assert_eq!(flow.report().unwrap().user_answers(), &[1, 0]);
    }

    #[test]
    fn previous_on_first_question_is_reported() {
        let mut flow = sample_flow();
        let out = run_script(&mut flow, "p\nq\n", false);
        assert!(out.contains("already at the first question"));
        assert!(out.contains("Exited."));
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn out_of_range_choice_is_reported() {
        let mut flow = sample_flow();
        let out = run_script(&mut flow, "9\n0\n", false);
        assert_eq!(out.matches("Choose an option between 1 and 4").count(), 2);
        assert!(flow.attempts().is_empty());
    }

    #[test]
    fn end_of_input_exits_without_report() {
        let mut flow = sample_flow();
        let out = run_script(&mut flow, "2\n", false);
        assert!(out.contains("Exited."));
        assert!(flow.report().is_none());
        assert!(flow.attempts().is_empty());
    }

    #[test]
    fn json_report() {
        let mut flow = sample_flow();
        let out = run_script(&mut flow, "2\n1\n", true);
        let start = out.find('{').unwrap();
        let value: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        assert_eq!(value["score"], 50);
        assert_eq!(value["total_questions"], 2);
        assert_eq!(value["user_answers"], serde_json::json!([1, 0]));
    }

    #[test]
    fn unknown_quiz_fails() {
        let mut flow = sample_flow();
        let err = run(&mut flow, QuizId::new(7), "".as_bytes(), Vec::new(), false).unwrap_err();
        assert!(err.to_string().contains("quiz 7 not found"));
    }
}
