use super::*;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        firmenname: "Muster AG".to_owned(),
        adresse: "Bahnhofstrasse 1, 8000 Zürich".to_owned(),
        kontaktperson: "Kim Muster".to_owned(),
        email: "jobs@muster.ch".to_owned(),
        telefon: "+41791234567".to_owned(),
        passwort: "geheim".to_owned(),
    }
}

// =============================================================
// field updates
// =============================================================

#[test]
fn set_field_sanitizes_each_keystroke() {
    let mut form = RegistrationForm::default();
    form.set_field(FirmaField::Firmenname, "<b>Muster</b> AG");
    form.set_field(FirmaField::Kontaktperson, "<script>x</script>Kim");
    assert_eq!(form.field(FirmaField::Firmenname), "Muster AG");
    assert_eq!(form.field(FirmaField::Kontaktperson), "Kim");
}

#[test]
fn set_passwort_sanitizes() {
    let mut form = RegistrationForm::default();
    form.set_passwort("<i>geheim</i>");
    assert_eq!(form.passwort, "geheim");
}

// =============================================================
// validation
// =============================================================

#[test]
fn valid_form_passes_with_offen_status() {
    let submission = valid_form().validate().unwrap();
    assert_eq!(submission.status, FirmaStatus::Offen);
    assert_eq!(submission.firmenname, "Muster AG");
}

#[test]
fn empty_firmenname_is_reported() {
    let form = RegistrationForm { firmenname: String::new(), ..valid_form() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors, vec![FIRMENNAME_REQUIRED.to_owned()]);
    assert!(errors.contains(&"Firmenname ist erforderlich.".to_owned()));
}

#[test]
fn whitespace_only_counts_as_missing() {
    let form = RegistrationForm { adresse: "   ".to_owned(), ..valid_form() };
    assert_eq!(form.validate().unwrap_err(), vec![ADRESSE_REQUIRED.to_owned()]);
}

#[test]
fn kontaktperson_is_optional() {
    let form = RegistrationForm { kontaktperson: String::new(), ..valid_form() };
    assert!(form.validate().is_ok());
}

#[test]
fn empty_form_collects_every_required_message() {
    let errors = RegistrationForm::default().validate().unwrap_err();
    assert_eq!(
        errors,
        vec![
            FIRMENNAME_REQUIRED.to_owned(),
            ADRESSE_REQUIRED.to_owned(),
            EMAIL_REQUIRED.to_owned(),
            TELEFON_REQUIRED.to_owned(),
            PASSWORT_REQUIRED.to_owned(),
        ]
    );
}

#[test]
fn format_failures_are_collected_together() {
    let form = RegistrationForm {
        email: "jobs@muster.org".to_owned(),
        telefon: "0791234567".to_owned(),
        passwort: "1234".to_owned(),
        ..valid_form()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors, vec![EMAIL_INVALID.to_owned(), PASSWORT_TOO_SHORT.to_owned(), TELEFON_INVALID.to_owned()]);
}

#[test]
fn markup_only_field_is_treated_as_empty() {
    let form = RegistrationForm { firmenname: "<b></b>".to_owned(), ..valid_form() };
    assert_eq!(form.validate().unwrap_err(), vec![FIRMENNAME_REQUIRED.to_owned()]);
}

#[test]
fn submission_trims_text_fields() {
    let form = RegistrationForm { firmenname: "  Muster AG ".to_owned(), ..valid_form() };
    assert_eq!(form.submission().firmenname, "Muster AG");
}

// =============================================================
// post-submit reset policy
// =============================================================

#[test]
fn reset_with_clear_policy_empties_everything() {
    let mut form = valid_form();
    form.reset_after_submit(PasswordRetention::Clear);
    assert_eq!(form, RegistrationForm::default());
}

#[test]
fn reset_with_retain_policy_keeps_only_password() {
    let mut form = valid_form();
    form.reset_after_submit(PasswordRetention::Retain);
    assert_eq!(form, RegistrationForm { passwort: "geheim".to_owned(), ..RegistrationForm::default() });
}

#[test]
fn retained_password_survives_on_the_form_that_stays_open() {
    let retention = PasswordRetention::Retain;
    let mut form = RegistrationForm { firmenname: "Muster AG".to_owned(), passwort: "geheim".to_owned(), ..RegistrationForm::default() };
    form.reset_after_submit(retention);
    assert!(!retention.leaves_form_after_submit());
    assert_eq!(form.passwort, "geheim");
    assert_eq!(form.firmenname, "");
}
