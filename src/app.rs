//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads its collaborators from context: the client config, the
//! HTTP API, the status-change bus, and the in-memory edit hand-off. Nothing
//! here is global state.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    admin::AdminPage, edit_firma::EditFirmaPage, firmen_list::FirmenListPage, home::HomePage, privacy::PrivacyPage,
    register::RegistrationPage,
};
use crate::state::edit::EditTarget;
use crate::util::status_bus::StatusBus;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let api = HttpApi::from_config(&config);
    let bus = StatusBus::browser();
    let router_base = config.router_base.clone();
    log::info!("firmen-portal starting against {}", api.base());

    // Signals written by other tabs reach this tab's subscribers.
    #[cfg(feature = "csr")]
    {
        let listener = crate::util::status_bus::forward_storage_events(bus.clone());
        on_cleanup(move || listener.remove());
    }

    provide_context(config);
    provide_context(api);
    provide_context(bus);
    provide_context(RwSignal::new(EditTarget::default()));

    view! {
        <Stylesheet id="firmen-portal" href="style/firmen.css"/>
        <Title text="Firmenbewerbungsplattform"/>

        <Router base=router_base>
            <main class="app">
                <Routes fallback=|| "Seite nicht gefunden.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("register") view=RegistrationPage/>
                    <Route path=StaticSegment("firmen-list") view=FirmenListPage/>
                    <Route path=(StaticSegment("edit-firma"), ParamSegment("id")) view=EditFirmaPage/>
                    <Route path=StaticSegment("datenschutz") view=PrivacyPage/>
                </Routes>
            </main>
        </Router>
    }
}
