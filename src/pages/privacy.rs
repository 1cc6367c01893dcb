//! Static privacy notice.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="privacy-page">
            <h1>"Datenschutzerklärung"</h1>
            <h2>"Welche Daten wir speichern"</h2>
            <p>
                "Bei der Registrierung speichern wir Firmenname, Adresse, Kontaktperson, "
                "E-Mail-Adresse und Telefonnummer sowie ein Passwort, mit dem Ihre Angaben "
                "später geändert werden können. Das Passwort wird nicht angezeigt und kann "
                "nicht zurückgesetzt werden."
            </p>
            <h2>"Wofür wir die Daten verwenden"</h2>
            <p>
                "Die Angaben dienen ausschliesslich der Bearbeitung Ihrer Bewerbung. "
                "Firmenname und Kontaktdaten sind in der öffentlichen Firmenliste sichtbar."
            </p>
            <h2>"Cookies"</h2>
            <p>
                "Für Anfragen an den Server wird ein Sicherheits-Cookie verwendet, das vor "
                "gefälschten Anfragen schützt. Es werden keine Tracking-Cookies gesetzt."
            </p>
            <h2>"Ihre Rechte"</h2>
            <p>
                "Sie können Ihre Angaben jederzeit über die Firmenliste ändern oder die "
                "Löschung Ihrer Daten beim Betreiber der Plattform verlangen."
            </p>
            <A href="/">"Zurück zur Startseite"</A>
        </div>
    }
}
