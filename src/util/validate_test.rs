use super::*;

#[test]
fn email_accepts_ch_and_com() {
    assert!(is_valid_email("a@b.ch"));
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("kim.muster+jobs@mail.muster-ag.ch"));
}

#[test]
fn email_rejects_other_tlds_and_missing_tld() {
    assert!(!is_valid_email("a@b.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.ch"));
    assert!(!is_valid_email("a b@c.ch"));
    assert!(!is_valid_email(""));
}

#[test]
fn phone_accepts_swiss_and_german_prefixes() {
    assert!(is_valid_phone("+41791234567"));
    assert!(is_valid_phone("+4915112345678"));
}

#[test]
fn phone_ignores_embedded_spaces() {
    assert!(is_valid_phone("+41 79 123 45 67"));
}

#[test]
fn phone_rejects_missing_or_unknown_prefix() {
    assert!(!is_valid_phone("0791234567"));
    assert!(!is_valid_phone("+1791234567"));
    assert!(!is_valid_phone("+4179123456"));
    assert!(!is_valid_phone("+41-79-123-45-67"));
}

#[test]
fn password_requires_five_characters() {
    assert!(is_valid_password("12345"));
    assert!(is_valid_password("ein langes passwort"));
    assert!(!is_valid_password("1234"));
    assert!(!is_valid_password(""));
}

#[test]
fn password_counts_characters_not_bytes() {
    assert!(!is_valid_password("äöü"));
    assert!(is_valid_password("äöüéè"));
}
