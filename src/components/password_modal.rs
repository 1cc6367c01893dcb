//! Password prompt guarding the edit view.
//!
//! DESIGN
//! ======
//! The modal owns no state. The list page passes in the password signal and
//! the busy flag so it can clear both after the check resolves.

use leptos::prelude::*;

use crate::util::sanitize::{MAX_FIELD_CHARS, sanitize};

/// Backdrop click and `Escape` close; `Enter` submits.
#[component]
pub fn PasswordModal(
    password: RwSignal<String>,
    busy: RwSignal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_submit.run(());
        }
        "Escape" => {
            ev.prevent_default();
            on_close.run(());
        }
        _ => {}
    };

    view! {
        <div class="password-modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="password-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="password-modal__header">
                    <h2>"Passwort eingeben, um fortzufahren"</h2>
                    <button class="password-modal__close" on:click=move |_| on_close.run(()) title="Schliessen">
                        "✕"
                    </button>
                </div>
                <input
                    class="password-modal__input"
                    type="password"
                    placeholder="Passwort eingeben"
                    autocomplete="off"
                    maxlength=MAX_FIELD_CHARS.to_string()
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(sanitize(&event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <div class="password-modal__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if busy.get() { "Überprüfe Passwort..." } else { "Firma bearbeiten" }}
                    </button>
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Abbrechen"
                    </button>
                </div>
            </div>
        </div>
    }
}
