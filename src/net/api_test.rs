use super::*;

const BASE: &str = "https://backend.example/api";

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(csrf_endpoint(BASE), "https://backend.example/api/csrf-token");
    assert_eq!(admin_login_endpoint(BASE), "https://backend.example/api/admin/login");
    assert_eq!(firma_collection_endpoint(BASE), "https://backend.example/api/firma");
    assert_eq!(register_endpoint(BASE), "https://backend.example/api/firma/register");
}

#[test]
fn record_endpoints_embed_identifier() {
    assert_eq!(firma_endpoint(BASE, &FirmaId::Number(3)), "https://backend.example/api/firma/3");
    assert_eq!(
        check_password_endpoint(BASE, &FirmaId::Text("66a1".to_owned())),
        "https://backend.example/api/firma/check-passwort/66a1"
    );
}

#[test]
fn error_message_from_body_reads_error_field() {
    assert_eq!(error_message_from_body(r#"{ "error": "E-Mail existiert" }"#), Some("E-Mail existiert".to_owned()));
    assert_eq!(error_message_from_body("Internal Server Error"), None);
    assert_eq!(error_message_from_body(r#"{ "message": "nope" }"#), None);
}

#[test]
fn echoed_status_prefers_backend_value() {
    let raw = r#"{ "id": 3, "firmenname": "X", "status": "versendet" }"#;
    assert_eq!(echoed_status(raw, FirmaStatus::InArbeit), FirmaStatus::Versendet);
}

#[test]
fn echoed_status_falls_back_to_requested_value() {
    assert_eq!(echoed_status("", FirmaStatus::InArbeit), FirmaStatus::InArbeit);
    assert_eq!(echoed_status("{}", FirmaStatus::Offen), FirmaStatus::Offen);
    assert_eq!(echoed_status(r#"{ "status": "archiviert" }"#, FirmaStatus::Versendet), FirmaStatus::Versendet);
}

#[test]
fn http_api_uses_configured_base() {
    let config = ClientConfig::from_values(Some("http://localhost:8080/api/"), None, None).unwrap();
    assert_eq!(HttpApi::from_config(&config).base(), "http://localhost:8080/api");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_is_unavailable_outside_the_browser() {
    let api = HttpApi::new(BASE);
    assert_eq!(futures::executor::block_on(api.list_firmen()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.fetch_csrf_token()), "");
}
