use super::*;
use crate::net::fake::firma;
use crate::net::types::{FirmaId, FirmaStatus};

#[test]
fn form_prefills_from_record() {
    let original = firma(3, "Muster AG", FirmaStatus::InArbeit);
    let form = EditForm::from_firma(&original);
    for field in FirmaField::ALL {
        assert_eq!(form.field(field), field.read(&original));
    }
}

#[test]
fn set_field_sanitizes() {
    let mut form = EditForm::default();
    form.set_field(FirmaField::Adresse, "<b>Weg</b> 2");
    assert_eq!(form.adresse, "Weg 2");
}

#[test]
fn merge_keeps_original_for_empty_fields() {
    let original = firma(3, "Muster AG", FirmaStatus::InArbeit);
    let mut form = EditForm::from_firma(&original);
    form.set_field(FirmaField::Firmenname, "");
    form.set_field(FirmaField::Telefon, "+41 79 000 00 00");

    let merged = form.merge_over(&original);
    assert_eq!(merged.firmenname, "Muster AG");
    assert_eq!(merged.telefon, "+41 79 000 00 00");
    assert_eq!(merged.id, original.id);
    assert_eq!(merged.status, FirmaStatus::InArbeit);
}

#[test]
fn merge_sanitizes_again_before_submit() {
    let original = firma(3, "Muster AG", FirmaStatus::Offen);
    let mut form = EditForm::from_firma(&original);
    form.kontaktperson = "<script>alert(1)</script>Kim".to_owned();
    assert_eq!(form.merge_over(&original).kontaktperson, "Kim");
}

#[test]
fn merge_treats_markup_only_input_as_empty() {
    let original = firma(3, "Muster AG", FirmaStatus::Offen);
    let mut form = EditForm::from_firma(&original);
    form.email = "<i></i>".to_owned();
    assert_eq!(form.merge_over(&original).email, original.email);
}

#[test]
fn edit_target_matches_route_identifier() {
    let target = EditTarget(Some(firma(3, "Muster AG", FirmaStatus::Offen)));
    assert_eq!(target.for_route("3").map(|f| f.id.clone()), Some(FirmaId::Number(3)));
    assert!(target.for_route("4").is_none());
    assert!(EditTarget::default().for_route("3").is_none());
}
