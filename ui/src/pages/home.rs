//! Home/landing page

use leptos::prelude::*;

use crate::components::Header;
use crate::state::AppState;

/// Home page with hero section
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_auth = move || state.current_user.with(|u| u.is_some());

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />

            // Hero section
            <section class="flex-1 flex items-center justify-center px-4 py-16">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="mb-8 animate-fade-in">
                        <img src="/assets/luca.svg" alt="Luca" class="w-24 h-24 mx-auto" />
                    </div>

                    <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-slide-up">
                        <span class="text-gradient">"Luca"</span>
                    </h1>

                    <p class="text-xl md:text-2xl text-[var(--text-secondary)] mb-4 animate-slide-up stagger-1">
                        "Your finance co-pilot"
                    </p>

                    <p class="text-lg text-[var(--text-muted)] mb-12 max-w-2xl mx-auto animate-slide-up stagger-2">
                        "Ask questions about your books, prepare for tax season and "
                        "walk into every audit with the answers already written down."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center animate-slide-up stagger-3">
                        <Show
                            when=is_auth
                            fallback=move || view! {
                                <a href="/login" class="btn btn-primary px-8 py-4 text-lg">"Get Started"</a>
                            }
                        >
                            <a href="/chat" class="btn btn-primary px-8 py-4 text-lg">"Open Chat"</a>
                        </Show>
                    </div>
                </div>
            </section>

            // Features section
            <section class="py-20 px-4 section-muted">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12">"Built for accountants"</h2>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="🔍"
                            title="Research"
                            description="Find the rule, the ruling and the paragraph that applies"
                        />
                        <FeatureCard
                            icon="📈"
                            title="Analysis"
                            description="Ratios, variances and trends explained in plain language"
                        />
                        <FeatureCard
                            icon="🧾"
                            title="Tax"
                            description="Deductions, deadlines and filing questions answered in context"
                        />
                        <FeatureCard
                            icon="✅"
                            title="Audit"
                            description="Prepare evidence and walk through controls before fieldwork"
                        />
                        <FeatureCard
                            icon="🔮"
                            title="Forecast"
                            description="Project cash flow and revenue from the numbers you already have"
                        />
                        <FeatureCard
                            icon="🔒"
                            title="Private"
                            description="Your session stays in a secure cookie and your data stays yours"
                        />
                    </div>
                </div>
            </section>

            <footer class="py-8 px-4 border-t border-[var(--border-default)] text-center text-[var(--text-muted)]">
                <p>"Luca • MIT License"</p>
            </footer>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="card p-6 transition-colors">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-[var(--text-secondary)]">{description}</p>
        </div>
    }
}
