//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <span class="landing-page__logo">"TB"</span>
                <h1>"Talachi Bank"</h1>
                <p class="landing-page__tagline">
                    "Wire transfers authorized with post-quantum SDitH signatures."
                </p>
                <div class="landing-page__actions">
                    <a class="btn btn--primary" href="/login">
                        "Sign In"
                    </a>
                    <a class="btn" href="/register">
                        "Open an Account"
                    </a>
                </div>
            </header>
            <section class="landing-page__features">
                <div class="feature-card">
                    <h3>"Quantum-Safe Signing"</h3>
                    <p>"Every transfer is signed with an SDitH key held for your account."</p>
                </div>
                <div class="feature-card">
                    <h3>"Independent Verification"</h3>
                    <p>"Any transaction can be re-verified against its signature at any time."</p>
                </div>
                <div class="feature-card">
                    <h3>"Risk Scoring"</h3>
                    <p>"Transfers are screened and scored before execution."</p>
                </div>
            </section>
        </div>
    }
}
