//! Public company list with search and the password-gated edit entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list refetches once per status-change signal from the admin view,
//! whether it arrives from this tab or another one. The subscription lives
//! exactly as long as the page.
//!
//! DESIGN
//! ======
//! A successful password check stores the record in the app-level
//! [`EditTarget`] and navigates to the edit route. The password never leaves
//! this page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::firma_card::FirmaCard;
use crate::components::password_modal::PasswordModal;
use crate::net::api::HttpApi;
use crate::net::types::Firma;
use crate::state::edit::EditTarget;
use crate::state::firmen::FirmenState;
use crate::util::sanitize::{MAX_FIELD_CHARS, sanitize};
use crate::util::status_bus::StatusBus;

#[component]
pub fn FirmenListPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let bus = expect_context::<StatusBus>();
    let edit_target = expect_context::<RwSignal<EditTarget>>();
    let navigate = use_navigate();

    let firmen = RwSignal::new(FirmenState { loading: true, ..FirmenState::default() });
    let reload = RwSignal::new(0_u64);
    let selected = RwSignal::new(None::<Firma>);
    let password = RwSignal::new(String::new());
    let checking = RwSignal::new(false);
    let pending_route = RwSignal::new(None::<String>);

    let subscription = bus.subscribe(move |_| {
        reload.try_update(|n| *n += 1);
    });
    on_cleanup(move || {
        bus.unsubscribe(subscription);
    });

    // Initial fetch, then one refetch per received signal.
    let fetch_api = api.clone();
    Effect::new(move || {
        reload.track();
        let api = fetch_api.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(items) = crate::actions::list::load_firmen(&api).await {
                firmen.update(|f| f.replace_all(items));
            }
            firmen.update(|f| f.loading = false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = api;
            firmen.update(|f| f.loading = false);
        }
    });

    Effect::new(move || {
        if let Some(route) = pending_route.get() {
            pending_route.set(None);
            navigate(&route, NavigateOptions::default());
        }
    });

    let on_edit = Callback::new(move |firma: Firma| {
        password.set(String::new());
        selected.set(Some(firma));
    });
    let on_close = Callback::new(move |()| {
        selected.set(None);
        password.set(String::new());
    });

    let on_submit = Callback::new(move |()| {
        if checking.get_untracked() {
            return;
        }
        let Some(firma) = selected.get_untracked() else {
            return;
        };
        let raw = password.get_untracked();
        checking.set(true);

        let api = api.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::actions::list::GateDenial;

            match crate::actions::list::unlock_edit(&api, &firma, &raw).await {
                Ok(grant) => {
                    let route = grant.path();
                    edit_target.set(EditTarget(Some(grant.into_firma())));
                    on_close.run(());
                    pending_route.set(Some(route));
                }
                // Local rejections keep the prompt open for another try.
                Err(denial @ (GateDenial::MissingPassword | GateDenial::TooShort)) => {
                    crate::util::alert::alert(denial.message());
                }
                Err(denial) => {
                    crate::util::alert::alert(denial.message());
                    on_close.run(());
                }
            }
            checking.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (api, firma, raw, edit_target);
            checking.set(false);
        }
    });

    let back_home = use_navigate();

    view! {
        <div class="firmen-page">
            <h1>"Firmenliste"</h1>
            <input
                class="search-bar"
                type="text"
                placeholder="Suche nach Firmen..."
                maxlength=MAX_FIELD_CHARS.to_string()
                prop:value=move || firmen.with(|f| f.search.clone())
                on:input=move |ev| firmen.update(|f| f.search = sanitize(&event_target_value(&ev)))
            />
            <Show
                when=move || !firmen.with(|f| f.loading)
                fallback=|| {
                    view! {
                        <div class="loading">
                            <div class="loading__spinner"></div>
                            <p>"Lädt..."</p>
                            <p class="loading__hint">"Hinweis: Die Firmenliste braucht etwas Zeit um zu laden"</p>
                        </div>
                    }
                }
            >
                <ul class="firmen-liste">
                    {move || {
                        firmen
                            .with(FirmenState::visible)
                            .into_iter()
                            .map(|firma| {
                                let target = firma.clone();
                                view! {
                                    <FirmaCard firma=firma>
                                        <button class="btn" on:click=move |_| on_edit.run(target.clone())>
                                            "Bearbeiten"
                                        </button>
                                    </FirmaCard>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
            <Show when=move || selected.with(Option::is_some)>
                <PasswordModal password=password busy=checking on_submit=on_submit on_close=on_close />
            </Show>
            <button class="btn btn--back" on:click=move |_| back_home("/", NavigateOptions::default())>
                "Zurück zur Startseite"
            </button>
        </div>
    }
}
