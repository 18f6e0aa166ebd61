//! AI tools hub: the counselor chat and a step-by-step problem solver.

#[cfg(test)]
#[path = "ai_tools_test.rs"]
mod ai_tools_test;

use leptos::prelude::*;

use super::ai_chatbot::AiChatbotContent;
use crate::components::shell::AppShell;
use crate::net::api::ApiError;
use crate::net::types::SolutionStep;
use crate::state::auth::SessionHandle;

const SAMPLE_PROBLEM: &str = "A train travels 120 km at a uniform speed. If the speed had been 5 km/h more, it would \
                              have taken 1 hour less. Find the original speed.";

const SOLVE_FAILED: &str = "The AI could not solve this problem. Please try rephrasing or check the server.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiTool {
    Chatbot,
    Solver,
}

impl AiTool {
    pub const ALL: [Self; 2] = [Self::Chatbot, Self::Solver];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chatbot => "AI Chatbot",
            Self::Solver => "Step-by-Step Solver",
        }
    }
}

/// Progress of one solve request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SolverState {
    #[default]
    Idle,
    Solving,
    Solved(Vec<SolutionStep>),
    Failed(String),
}

impl SolverState {
    /// Problem text to send, or `None` when it is blank or a solve is running.
    #[must_use]
    pub fn begin(&self, problem: &str) -> Option<String> {
        let problem = problem.trim();
        (!problem.is_empty() && *self != Self::Solving).then(|| problem.to_owned())
    }

    #[must_use]
    pub fn finish(result: Result<Vec<SolutionStep>, ApiError>) -> Self {
        match result {
            Ok(steps) => Self::Solved(steps),
            Err(e) => {
                log::warn!("solve request failed: {e}");
                Self::Failed(SOLVE_FAILED.to_owned())
            }
        }
    }
}

/// Badge text for the step at `index`: the server's label, else its position.
#[must_use]
pub fn step_badge(index: usize, step: &SolutionStep) -> String {
    step.step.clone().unwrap_or_else(|| (index + 1).to_string())
}

#[component]
pub fn AiToolsPage() -> impl IntoView {
    let tool = RwSignal::new(AiTool::Chatbot);
    view! {
        <AppShell>
            <section class="page ai-tools">
                <div class="tabs">
                    {AiTool::ALL
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tool.get() == option
                                    on:click=move |_| tool.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || match tool.get() {
                    AiTool::Chatbot => view! { <AiChatbotContent/> }.into_any(),
                    AiTool::Solver => view! { <SolverPanel/> }.into_any(),
                }}
            </section>
        </AppShell>
    }
}

#[component]
fn SolverPanel() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let problem = RwSignal::new(SAMPLE_PROBLEM.to_owned());
    let state = RwSignal::new(SolverState::Idle);

    let on_solve = move |_| {
        let Some(text) = state.with_untracked(|s| problem.with_untracked(|p| s.begin(p))) else {
            return;
        };
        state.set(SolverState::Solving);
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::endpoints::solve_step_by_step(&client, &text).await;
            state.set(SolverState::finish(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, text);
    };

    let solving = move || state.with(|s| *s == SolverState::Solving);

    view! {
        <div class="card solver">
            <h2>"Problem Solver"</h2>
            <div class="solver__input">
                <textarea
                    class="form__input form__input--multiline"
                    rows="3"
                    placeholder="Enter a math or science problem here..."
                    prop:value=move || problem.get()
                    on:input=move |ev| problem.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" disabled=solving on:click=on_solve>
                    {move || if solving() { "Solving..." } else { "Solve" }}
                </button>
            </div>
            {move || match state.get() {
                SolverState::Failed(message) => view! { <p class="status status--error">{message}</p> }.into_any(),
                SolverState::Solved(steps) => view! {
                    <ol class="solver__steps">
                        {steps
                            .iter()
                            .enumerate()
                            .map(|(index, step)| {
                                view! {
                                    <li class="solver__step">
                                        <span class="solver__badge">{step_badge(index, step)}</span>
                                        <div>
                                            <h3>{step.title.clone()}</h3>
                                            <p>{step.content.clone()}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                }
                .into_any(),
                SolverState::Idle | SolverState::Solving => ().into_any(),
            }}
        </div>
    }
}
