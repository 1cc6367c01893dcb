//! One company entry in the public list and the admin triage view.

use leptos::prelude::*;

use crate::net::types::Firma;

/// Card showing the record fields. The status class colours the card;
/// `children` render into the footer (edit button, status select, delete).
#[component]
pub fn FirmaCard(firma: Firma, #[prop(optional)] show_id: bool, children: Children) -> impl IntoView {
    let class = format!("firmen-item {}", firma.status.css_class());
    let id_label = show_id.then(|| firma.id.to_string());
    let status_label = firma.status.label();
    let Firma { firmenname, adresse, kontaktperson, email, telefon, .. } = firma;

    view! {
        <li class=class>
            {id_label.map(|id| view! {
                <p class="firmen-item__id">
                    <strong>"ID: "</strong>
                    {id}
                </p>
            })}
            <p class="firmen-item__name">
                <strong>"Firmenname: "</strong>
                {firmenname}
            </p>
            <p class="firmen-item__detail">
                <strong>"Adresse: "</strong>
                {adresse}
            </p>
            <p class="firmen-item__detail">
                <strong>"Kontaktperson: "</strong>
                {kontaktperson}
            </p>
            <p class="firmen-item__detail">
                <strong>"E-Mail: "</strong>
                {email}
            </p>
            <p class="firmen-item__detail">
                <strong>"Telefonnummer: "</strong>
                {telefon}
            </p>
            <p class="firmen-item__detail">
                <strong>"Status: "</strong>
                {status_label}
            </p>
            <div class="firmen-item__footer">{children()}</div>
        </li>
    }
}
