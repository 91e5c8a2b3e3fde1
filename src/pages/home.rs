//! Public landing page.

use leptos::prelude::*;
use leptos_meta::Title;

/// Home page — static marketing hero with entry points into the portal.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Curo24 - Complete Healthcare Solutions"/>
        <div class="home-page">
            <section class="hero">
                <h1>"Complete Healthcare Solutions"</h1>
                <p class="hero__subtitle">
                    "Get medicines delivered in 15 minutes, consult doctors online, book lab \
                     tests, ambulance services, and access emergency healthcare with Curo24."
                </p>
                <a class="btn btn--primary hero__cta" href="/profile">
                    "My Health Profile"
                </a>
            </section>
            <section class="services">
                <ul class="services__list">
                    <li>"Medicine delivery"</li>
                    <li>"Doctor consultation"</li>
                    <li>"Lab tests at home"</li>
                    <li>"Ambulance booking"</li>
                    <li>"Blood bank search"</li>
                    <li>"Emergency care"</li>
                </ul>
            </section>
        </div>
    }
}
