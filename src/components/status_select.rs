//! Admin status dropdown for a single record.

use leptos::prelude::*;

use crate::net::types::{FirmaId, FirmaStatus};

/// Emits `(id, next)` when the admin picks a different status. Values the
/// dropdown does not know are ignored.
#[component]
pub fn StatusSelect(id: FirmaId, current: FirmaStatus, on_change: Callback<(FirmaId, FirmaStatus)>) -> impl IntoView {
    let on_select = move |ev: leptos::ev::Event| {
        let Some(next) = FirmaStatus::parse(&event_target_value(&ev)) else {
            return;
        };
        if next != current {
            on_change.run((id.clone(), next));
        }
    };

    view! {
        <label class="status-select">
            <strong>"Status ändern: "</strong>
            <select class=format!("status-select__input {}", current.css_class()) on:change=on_select>
                {FirmaStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <option value=status.as_str() selected=status == current>
                                {status.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
