//! Public marketing page.

use leptos::prelude::*;

use crate::components::public_header::PublicHeader;

const STEPS: [(&str, &str); 4] = [
    ("Holistic Assessment", "Complete quick, comprehensive tests that analyze your personality, interests, and skills."),
    ("AI-Powered Analysis", "Your profile is compared against thousands of successful career paths and opportunities."),
    ("Personalized Matches", "Receive your top career and stream matches with easy-to-understand explanations."),
    ("Actionable Roadmap", "Get a step-by-step plan with curated resources, skill suggestions, and milestones."),
];

const FEATURES: [(&str, &str); 3] = [
    ("AI-Powered Assessments", "Tests that go beyond academics to analyze your personality, interests, and innate skills."),
    ("Personalized Roadmap", "An interactive action plan, from stream selection to exam preparation."),
    ("India-Specific Guidance", "Curated databases of Indian colleges, scholarships, and localized career data."),
];

const FAQ: [(&str, &str); 4] = [
    (
        "How does the AI work?",
        "It analyzes your answers from the interest, aptitude, and personality assessments and compares your profile \
         against a large database of careers to find your best matches.",
    ),
    (
        "Is this platform only for students?",
        "The focus is on students from 9th grade to college, but early-career professionals seeking direction \
         benefit from the same tools.",
    ),
    (
        "What makes this different?",
        "Data-driven matching combined with India-specific insights, a step-by-step roadmap, and skill-building \
         resources.",
    ),
    (
        "Is my data safe?",
        "Your data is encrypted, anonymized for analysis, and never shared without your explicit consent.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let open_faq = RwSignal::new(Some(0_usize));

    view! {
        <div class="public-page landing">
            <PublicHeader/>
            <section class="hero">
                <h1>"Stop Guessing. " <span class="accent">"Start Knowing."</span></h1>
                <p>
                    "Discover your career path with AI. Personalized guidance for Indian students, from stream selection to college admission."
                </p>
                <a class="btn btn--primary btn--large" href="/login">
                    "Start Free Assessment"
                </a>
            </section>
            <section id="how-it-works" class="landing__steps">
                <h2>"Your Path to Clarity in 4 Steps"</h2>
                <div class="card-grid">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, text))| {
                            view! {
                                <div class="card step-card">
                                    <span class="step-card__number">{i + 1}</span>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section id="features" class="landing__features">
                <h2>"A Toolkit for Your Future"</h2>
                <div class="card-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, text)| view! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
            <section id="faq" class="landing__faq">
                <h2>"Have Questions? We Have Answers."</h2>
                {FAQ
                    .iter()
                    .enumerate()
                    .map(|(i, (question, answer))| {
                        view! {
                            <div class="faq">
                                <button
                                    class="faq__question"
                                    on:click=move |_| open_faq.update(|open| *open = if *open == Some(i) { None } else { Some(i) })
                                >
                                    {*question}
                                    <span class="faq__toggle">{move || if open_faq.get() == Some(i) { "−" } else { "+" }}</span>
                                </button>
                                <Show when=move || open_faq.get() == Some(i)>
                                    <p class="faq__answer">{*answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <footer class="landing__footer">
                <h2>"Ready to Find Your Clarity?"</h2>
                <a class="btn btn--light" href="/login">
                    "Take the First Step"
                </a>
                <p>
                    "© Learn-x-AI. All rights reserved. " <a href="/support">"Contact"</a>
                </p>
            </footer>
        </div>
    }
}
