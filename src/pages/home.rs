//! Landing page with the two public entry points.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let to_register = navigate.clone();

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Willkommen zur Firmenbewerbungsplattform"</h1>
                <p>
                    "Firmen registrieren sich hier für eine Bewerbung. Die Liste zeigt, "
                    "welche Firmen sich bereits beworben haben."
                </p>
            </header>
            <main class="home-page__actions">
                <button class="btn btn--primary" on:click=move |_| to_register("/register", NavigateOptions::default())>
                    "Firmen Bewerbung"
                </button>
                <button class="btn" on:click=move |_| navigate("/firmen-list", NavigateOptions::default())>
                    "Die beworbenen Firmen"
                </button>
            </main>
            <footer class="home-page__footer">
                <A href="/datenschutz">"Datenschutzerklärung"</A>
            </footer>
        </div>
    }
}
