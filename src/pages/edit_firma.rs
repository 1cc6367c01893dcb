//! Edit view for a record that passed the password gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the list after a successful password check. Opening the
//! route directly, or with an id other than the approved one, shows a hint
//! instead of a form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::HttpApi;
use crate::net::types::{Firma, FirmaField};
use crate::state::edit::{EditForm, EditTarget};
use crate::util::sanitize::MAX_FIELD_CHARS;

#[component]
pub fn EditFirmaPage() -> impl IntoView {
    let params = use_params_map();
    let edit_target = expect_context::<RwSignal<EditTarget>>();
    let approved = Memo::new(move |_| {
        let route_id = params.read().get("id").unwrap_or_default();
        edit_target.with(|t| t.for_route(&route_id).cloned())
    });

    view! {
        {move || match approved.get() {
            Some(firma) => view! { <EditFirmaForm firma=firma /> }.into_any(),
            None => {
                view! {
                    <div class="edit-page edit-page--locked">
                        <h1>"Firma bearbeiten"</h1>
                        <p>
                            "Bitte wählen Sie die Firma in der Firmenliste aus und bestätigen "
                            "Sie das Passwort, um die Angaben zu bearbeiten."
                        </p>
                        <A href="/firmen-list">"Zur Firmenliste"</A>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn EditFirmaForm(firma: Firma) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let edit_target = expect_context::<RwSignal<EditTarget>>();
    let navigate = use_navigate();

    let form = RwSignal::new(EditForm::from_firma(&firma));
    let original = StoredValue::new(firma);
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);

    Effect::new(move || {
        if saved.get() {
            navigate("/firmen-list", NavigateOptions::default());
            // The grant covers one edit.
            edit_target.set(EditTarget::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let original = original.get_value();
        let current = form.get_untracked();

        let api = api.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::actions::edit::submit_update(&api, &original, &current).await {
                Ok(_) => saved.set(true),
                Err(e) => {
                    crate::util::alert::alert(&e.alert_text(crate::actions::edit::UPDATE_FAILED_MESSAGE));
                    saving.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (api, original, current);
            saving.set(false);
        }
    };

    view! {
        <div class="edit-page">
            <h1>"Firma bearbeiten"</h1>
            <form class="edit-form" on:submit=on_submit>
                {FirmaField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <label class="edit-form__field">
                                {field.label()}
                                ":"
                                <input
                                    type=field.input_type()
                                    name=field.name()
                                    maxlength=MAX_FIELD_CHARS.to_string()
                                    prop:value=move || form.with(|f| f.field(field).to_owned())
                                    on:input=move |ev| form.update(|f| f.set_field(field, &event_target_value(&ev)))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Speichert..." } else { "Speichern" }}
                </button>
            </form>
            <A href="/firmen-list">"Abbrechen"</A>
        </div>
    }
}
