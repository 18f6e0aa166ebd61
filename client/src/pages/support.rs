//! Public help page with the contact form.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use leptos::prelude::*;

use crate::components::public_header::PublicHeader;
use crate::net::types::ContactRequest;

/// Submission type recorded for messages sent from this page.
pub const CONTACT_REQUEST: &str = "Contact Request";

/// Shown when the submission fails for any reason.
pub const SEND_FAILED: &str = "An error occurred. Please try again.";

/// Contact form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Build the submission body.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when a field is blank or the email has
    /// no `@`.
    pub fn to_request(&self) -> Result<ContactRequest, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err("Please fill in your name, email, and message.");
        }
        if !email.contains('@') {
            return Err("Please enter a valid email address.");
        }
        Ok(ContactRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            submission_type: CONTACT_REQUEST.to_owned(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SendStatus {
    Idle,
    Sending,
    Sent(String),
    Failed(String),
}

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <div class="public-page support">
            <PublicHeader/>
            <section class="hero">
                <h1>"We're Here to Help"</h1>
                <p>
                    "Have questions? Fill out the form below, or explore our other resources to find the answers you need."
                </p>
            </section>
            <section class="support__options">
                <div class="card">
                    <h3>"Email Us Directly"</h3>
                    <p>"For specific inquiries, reach our support team by email. We aim to respond within 24 hours."</p>
                    <a href="mailto:support@learnx.ai">"support@learnx.ai →"</a>
                </div>
                <div class="card">
                    <h3>"Read Our FAQs"</h3>
                    <p>"Quick answers to common questions about the platform, assessments, and features."</p>
                    <a href="/#faq">"Go to FAQ →"</a>
                </div>
            </section>
            <ContactSection/>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let status = RwSignal::new(SendStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SendStatus::Sending {
            return;
        }
        let request = match form.with_untracked(ContactForm::to_request) {
            Ok(request) => request,
            Err(message) => {
                status.set(SendStatus::Failed(message.to_owned()));
                return;
            }
        };
        status.set(SendStatus::Sending);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let client = crate::net::api::ApiClient::anonymous();
            match crate::net::endpoints::submit_contact(&client, &request).await {
                Ok(ack) => {
                    form.set(ContactForm::default());
                    let message =
                        if ack.message.is_empty() { "Thank you! Your message has been sent.".to_owned() } else { ack.message };
                    status.set(SendStatus::Sent(message));
                }
                Err(e) => {
                    log::warn!("contact submission failed: {e}");
                    status.set(SendStatus::Failed(SEND_FAILED.to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let sending = move || status.get() == SendStatus::Sending;

    view! {
        <section id="contact-form" class="support__contact">
            <h2>"Send Us a Message"</h2>
            <form class="form" on:submit=on_submit>
                <div class="form__row">
                    <input
                        type="text"
                        placeholder="Full Name"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Email Address"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <textarea
                    rows="5"
                    placeholder="Your Message"
                    required
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary btn--block" type="submit" disabled=sending>
                    {move || if sending() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
            {move || match status.get() {
                SendStatus::Sent(message) => Some(view! { <p class="status status--ok">{message}</p> }.into_any()),
                SendStatus::Failed(message) => Some(view! { <p class="status status--error">{message}</p> }.into_any()),
                SendStatus::Idle | SendStatus::Sending => None,
            }}
        </section>
    }
}
