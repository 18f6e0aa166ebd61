//! AI counselor chat. The backend returns the whole conversation on every
//! send, so the local history is replaced rather than appended to.

#[cfg(test)]
#[path = "ai_chatbot_test.rs"]
mod ai_chatbot_test;

use leptos::prelude::*;

use crate::components::shell::AppShell;
use crate::net::api::ApiError;
use crate::net::types::{ChatMessage, ChatSender};
use crate::state::auth::SessionHandle;

const QUICK_PROMPTS: [&str; 2] = [
    "What are some good careers for someone who likes art and technology?",
    "Explain the difference between JEE Main and JEE Advanced.",
];

const APOLOGY: &str = "Sorry, I'm having trouble connecting. Please try again later.";

/// Optimistically show the user's message. Returns the trimmed text to send,
/// or `None` for a blank message.
fn begin_send(history: &mut Vec<ChatMessage>, input: &str) -> Option<String> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    history.push(ChatMessage::user(text));
    Some(text.to_owned())
}

/// Settle a send: adopt the server's history, or append an apology bubble.
fn finish_send(history: &mut Vec<ChatMessage>, result: Result<Vec<ChatMessage>, ApiError>) {
    match result {
        Ok(conversation) => *history = conversation,
        Err(e) => {
            log::warn!("chat request failed: {e}");
            history.push(ChatMessage::ai(APOLOGY));
        }
    }
}

#[component]
pub fn AiChatbotPage() -> impl IntoView {
    view! {
        <AppShell>
            <AiChatbotContent/>
        </AppShell>
    }
}

#[component]
pub fn AiChatbotContent() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let history = RwSignal::new(Vec::<ChatMessage>::new());
    let input = RwSignal::new(String::new());
    let typing = RwSignal::new(false);

    let send = move |text: String| {
        if typing.get_untracked() {
            return;
        }
        let mut message = None;
        history.update(|h| message = begin_send(h, &text));
        let Some(message) = message else {
            return;
        };
        input.set(String::new());
        typing.set(true);
        let client = session.client_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::endpoints::chat(&client, &message).await;
            history.update(|h| finish_send(h, result));
            typing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, message);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send(input.get_untracked());
    };

    view! {
        <section class="page chat">
            <div class="chat__log">
                <Show when=move || history.with(Vec::is_empty)>
                    <div class="chat__intro">
                        <h2>"Your AI Career Counselor"</h2>
                        <p>"Start a conversation or try one of these prompts."</p>
                        {QUICK_PROMPTS
                            .iter()
                            .map(|prompt| {
                                view! {
                                    <button class="chat__prompt" on:click=move |_| send((*prompt).to_owned())>
                                        {*prompt}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
                <For
                    each=move || history.get().into_iter().enumerate()
                    key=|(i, message)| (*i, message.text.clone())
                    children=|(_, message): (usize, ChatMessage)| {
                        view! {
                            <div
                                class="chat__bubble"
                                class:chat__bubble--user=message.sender == ChatSender::User
                                class:chat__bubble--ai=message.sender == ChatSender::Ai
                            >
                                {message.text}
                            </div>
                        }
                    }
                />
                <Show when=move || typing.get()>
                    <div class="chat__bubble chat__bubble--ai chat__typing">"…"</div>
                </Show>
            </div>
            <form class="chat__composer" on:submit=on_submit>
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Ask anything about careers, colleges, or exams…"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || typing.get()>
                    "Send"
                </button>
            </form>
        </section>
    }
}
