use super::*;

fn step(label: Option<&str>, title: &str) -> SolutionStep {
    SolutionStep { step: label.map(str::to_owned), title: title.to_owned(), content: String::new() }
}

#[test]
fn begin_trims_problem_text() {
    assert_eq!(SolverState::Idle.begin("  2x + 3 = 7 \n"), Some("2x + 3 = 7".to_owned()));
}

#[test]
fn begin_refuses_blank_or_concurrent_solves() {
    assert_eq!(SolverState::Idle.begin("   "), None);
    assert_eq!(SolverState::Solving.begin("2x + 3 = 7"), None);
    assert_eq!(SolverState::Failed(SOLVE_FAILED.to_owned()).begin("retry"), Some("retry".to_owned()));
}

#[test]
fn finish_keeps_steps_in_order() {
    let steps = vec![step(Some("1"), "Let speed be x"), step(Some("2"), "Solve the quadratic")];
    assert_eq!(SolverState::finish(Ok(steps.clone())), SolverState::Solved(steps));
}

#[test]
fn finish_maps_any_error_to_rephrase_hint() {
    assert_eq!(SolverState::finish(Err(ApiError::Unavailable)), SolverState::Failed(SOLVE_FAILED.to_owned()));
}

#[test]
fn badge_falls_back_to_position() {
    assert_eq!(step_badge(0, &step(Some("Final"), "Answer")), "Final");
    assert_eq!(step_badge(2, &step(None, "Check")), "3");
}

#[test]
fn sample_problem_is_ready_to_solve() {
    assert!(SolverState::Idle.begin(SAMPLE_PROBLEM).is_some());
    assert_eq!(AiTool::ALL.map(AiTool::label), ["AI Chatbot", "Step-by-Step Solver"]);
}
