//! Admin page: login gate, then the triage list with status and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The triage view only exists while the gate holds an [`AdminSession`], and
//! the list fetch takes that session as an argument. Unauthenticated visitors
//! therefore never trigger a list request from this page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is alerted. Status and delete failures are also logged by
//! the actions and leave the list untouched.

use leptos::prelude::*;

use crate::actions::admin::DELETE_CONFIRM_MESSAGE;
use crate::components::firma_card::FirmaCard;
use crate::components::status_select::StatusSelect;
use crate::net::api::HttpApi;
use crate::net::types::{FirmaId, FirmaStatus};
use crate::state::auth::{AdminSession, AuthState};
use crate::state::firmen::FirmenState;
use crate::util::alert::confirm;
use crate::util::sanitize::{MAX_FIELD_CHARS, sanitize};
use crate::util::status_bus::StatusBus;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    // Only changes on login, so typing does not rebuild the view.
    let session = Memo::new(move |_| auth.with(|a| a.gate.session().cloned()));

    view! {
        {move || match session.get() {
            Some(session) => view! { <AdminTriage session=session /> }.into_any(),
            None => view! { <AdminLogin auth=auth /> }.into_any(),
        }}
    }
}

#[component]
fn AdminLogin(auth: RwSignal<AuthState>) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let max_chars = MAX_FIELD_CHARS.to_string();

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|a| a.checking) {
            return;
        }
        let (username, password) = auth.with_untracked(|a| (a.username.clone(), a.password.clone()));
        auth.update(|a| a.checking = true);

        let api = api.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = crate::actions::admin::login(&api, &username, &password).await;
            if let Err(e) = &outcome {
                crate::util::alert::alert(crate::actions::admin::login_failure_message(e));
            }
            auth.update(|a| a.apply_login(&outcome));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (api, username, password);
            auth.update(|a| a.checking = false);
        }
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_login>
                <h1>"Admin Login"</h1>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Benutzername eingeben"
                    autocomplete="off"
                    maxlength=max_chars.clone()
                    prop:value=move || auth.with(|a| a.username.clone())
                    on:input=move |ev| auth.update(|a| a.username = sanitize(&event_target_value(&ev)))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Passwort eingeben"
                    autocomplete="off"
                    maxlength=max_chars
                    prop:value=move || auth.with(|a| a.password.clone())
                    on:input=move |ev| auth.update(|a| a.password = sanitize(&event_target_value(&ev)))
                />
                <button class="btn btn--primary" type="submit" disabled=move || auth.with(|a| a.checking)>
                    {move || if auth.with(|a| a.checking) { "Überprüfe Login..." } else { "Einloggen" }}
                </button>
            </form>
        </div>
    }
}

#[component]
fn AdminTriage(session: AdminSession) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let bus = expect_context::<StatusBus>();
    let firmen = RwSignal::new(FirmenState { loading: true, ..FirmenState::default() });

    {
        let api = api.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(items) = crate::actions::admin::load_firmen(&api, &session).await {
                firmen.update(|f| f.replace_all(items));
            }
            firmen.update(|f| f.loading = false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (api, &session);
            firmen.update(|f| f.loading = false);
        }
    }

    let status_api = api.clone();
    let status_bus = bus.clone();
    let on_status = Callback::new(move |(id, status): (FirmaId, FirmaStatus)| {
        let api = status_api.clone();
        let bus = status_bus.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::actions::admin::change_status(&api, &bus, &id, status).await {
                Ok(confirmed) => firmen.update(|f| {
                    f.apply_status(&id, confirmed);
                }),
                Err(e) => crate::util::alert::alert(&e.alert_text(crate::actions::admin::STATUS_UPDATE_FAILED_MESSAGE)),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, bus, id, status);
    });

    let on_delete = Callback::new(move |id: FirmaId| {
        if !confirm(DELETE_CONFIRM_MESSAGE) {
            return;
        }
        let api = api.clone();
        let bus = bus.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::actions::admin::delete_firma(&api, &bus, &id).await {
                Ok(()) => firmen.update(|f| {
                    f.remove(&id);
                }),
                Err(e) => crate::util::alert::alert(&e.alert_text(crate::actions::admin::DELETE_FAILED_MESSAGE)),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (api, bus, id);
    });

    view! {
        <div class="firmen-page firmen-page--admin">
            <h1>"Firmenliste verwalten"</h1>
            <Show when=move || firmen.with(|f| f.loading)>
                <div class="loading">
                    <div class="loading__spinner"></div>
                    <p>"Lädt..."</p>
                </div>
            </Show>
            <ul class="firmen-liste">
                {move || {
                    firmen
                        .get()
                        .items
                        .into_iter()
                        .map(|firma| {
                            let id = firma.id.clone();
                            let delete_id = firma.id.clone();
                            let current = firma.status;
                            view! {
                                <FirmaCard firma=firma show_id=true>
                                    <StatusSelect id=id current=current on_change=on_status />
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| on_delete.run(delete_id.clone())
                                    >
                                        "Löschen"
                                    </button>
                                </FirmaCard>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

