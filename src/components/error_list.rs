//! Inline validation messages shown above the registration form.

use leptos::prelude::*;

#[component]
pub fn ErrorList(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || messages.with(|m| !m.is_empty())>
            <div class="error-list" role="alert">
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <div class="error-list__item">{message}</div> })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
