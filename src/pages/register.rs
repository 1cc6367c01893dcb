//! Company registration form.
//!
//! ERROR HANDLING
//! ==============
//! Validation messages render inline above the form. Backend and network
//! failures are alerted; the form keeps its input so the user can retry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_list::ErrorList;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::net::types::FirmaField;
use crate::state::registration::RegistrationForm;
use crate::util::sanitize::MAX_FIELD_CHARS;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let retention = expect_context::<ClientConfig>().password_retention;
    let navigate = use_navigate();

    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate("/firmen-list", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(messages) = current.validate() {
            errors.set(messages);
            return;
        }
        errors.set(Vec::new());
        submitting.set(true);

        let api = api.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::actions::registration::{REGISTERED_MESSAGE, RegistrationError, submit};
            use crate::util::alert::alert;

            match submit(&api, &current).await {
                Ok(_) => {
                    alert(REGISTERED_MESSAGE);
                    form.update(|f| f.reset_after_submit(retention));
                    if retention.leaves_form_after_submit() {
                        registered.set(true);
                    }
                }
                Err(RegistrationError::Invalid(messages)) => errors.set(messages),
                Err(e) => {
                    if let Some(text) = e.alert_text() {
                        alert(&text);
                    }
                }
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (api, retention, registered);
            submitting.set(false);
        }
    };

    view! {
        <div class="register-page">
            <h1>"Firma registrieren"</h1>
            <Show when=move || !submitting.get()>
                <ErrorList messages=errors />
            </Show>
            <Show when=move || submitting.get()>
                <div class="loading">
                    <div class="loading__spinner"></div>
                    <p>"Registrierung läuft... Bitte warten..."</p>
                </div>
            </Show>
            <form class="register-form" on:submit=on_submit>
                {FirmaField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <input
                                class="register-form__input"
                                type=field.input_type()
                                name=field.name()
                                placeholder=field.placeholder()
                                maxlength=MAX_FIELD_CHARS.to_string()
                                prop:value=move || form.with(|f| f.field(field).to_owned())
                                on:input=move |ev| form.update(|f| f.set_field(field, &event_target_value(&ev)))
                            />
                        }
                    })
                    .collect_view()}
                <input
                    class="register-form__input"
                    type="password"
                    name="passwort"
                    placeholder="Passwort*"
                    autocomplete="new-password"
                    maxlength=MAX_FIELD_CHARS.to_string()
                    prop:value=move || form.with(|f| f.passwort.clone())
                    on:input=move |ev| form.update(|f| f.set_passwort(&event_target_value(&ev)))
                />
                <p class="register-form__hint">"Hinweis: Das Passwort kann nicht zurückgesetzt werden."</p>
                <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                    "Registrieren"
                </button>
            </form>
            <p class="register-page__privacy">
                "Mit der Registrierung akzeptieren Sie die "
                <A href="/datenschutz">"Datenschutzerklärung"</A>
                "."
            </p>
        </div>
    }
}
