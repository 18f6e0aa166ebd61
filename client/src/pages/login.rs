//! Login page with a sign-in / sign-up toggle.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::state::auth::SessionHandle;
use crate::state::session::AuthRequest;
use crate::util::auth::install_signed_in_redirect;

/// Build the auth request from the form, or explain what is missing.
fn validate_auth_input(signup: bool, name: &str, email: &str, password: &str) -> Result<AuthRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if signup && name.is_empty() {
        return Err("Please enter your full name.");
    }
    if email.is_empty() || password.is_empty() {
        return Err("Please enter your email and password.");
    }
    Ok(if signup {
        AuthRequest::Register { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() }
    } else {
        AuthRequest::Login { email: email.to_owned(), password: password.to_owned() }
    })
}

/// The server's explanation when it sent one, otherwise a generic message.
#[cfg(any(test, feature = "hydrate"))]
fn auth_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized { message, .. } | ApiError::Status { message, .. } if !message.is_empty() => {
            message.clone()
        }
        _ => "An unexpected error occurred.".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    install_signed_in_redirect(session, use_navigate());

    let signup = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_auth_input(signup.get(), &name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // On success the signed-in redirect moves us to the dashboard.
            if let Err(e) = session.login(request).await {
                log::warn!("sign-in failed: {e}");
                error.set(Some(auth_error_message(&e)));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let toggle = move |_| {
        signup.update(|s| *s = !*s);
        error.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <a class="login-card__brand" href="/">
                    "Learn-x-AI"
                </a>
                <h2>{move || if signup.get() { "Create Account" } else { "Welcome Back" }}</h2>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || signup.get()>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.with(Option::is_some)>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || match (busy.get(), signup.get()) {
                            (true, _) => "Please wait…",
                            (false, true) => "Sign Up",
                            (false, false) => "Log In",
                        }}
                    </button>
                </form>
                <p class="login-card__switch">
                    {move || if signup.get() { "Already have an account?" } else { "New here?" }}
                    " "
                    <button class="link-button" on:click=toggle>
                        {move || if signup.get() { "Log in" } else { "Create an account" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
