use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::net::fake::{Call, FakeApi, firma};
use crate::state::firmen::FirmenState;

fn counted_bus() -> (StatusBus, Arc<AtomicUsize>) {
    let bus = StatusBus::browser();
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    bus.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (bus, hits)
}

// =============================================================
// login
// =============================================================

#[test]
fn login_sends_sanitized_credentials_with_token() {
    let api = FakeApi::new().with_token("tok-login").accepting_login();
    let session = block_on(login(&api, "  <b>admin</b> ", " geheim ")).unwrap();

    assert_eq!(session.username(), "admin");
    assert_eq!(
        api.calls(),
        vec![
            Call::CsrfToken,
            Call::AdminLogin { username: "admin".to_owned(), password: "geheim".to_owned(), token: "tok-login".to_owned() },
        ]
    );
}

#[test]
fn login_rejected_when_backend_says_invalid() {
    let api = FakeApi::new();
    assert_eq!(block_on(login(&api, "admin", "falsch")), Err(ApiError::Rejected));
}

#[test]
fn login_aborts_without_token() {
    let api = FakeApi::new().with_token("").accepting_login();
    assert_eq!(block_on(login(&api, "admin", "geheim")), Err(ApiError::MissingCsrfToken));
    assert!(api.backend_calls().is_empty());
}

#[test]
fn login_propagates_transport_errors() {
    let api = FakeApi::new().accepting_login().failing(ApiError::Network("offline".to_owned()));
    assert_eq!(block_on(login(&api, "admin", "geheim")), Err(ApiError::Network("offline".to_owned())));
}

#[test]
fn login_failure_message_only_distinguishes_missing_token() {
    assert_eq!(login_failure_message(&ApiError::MissingCsrfToken), CSRF_UNAVAILABLE_MESSAGE);
    assert_eq!(login_failure_message(&ApiError::Rejected), LOGIN_REJECTED_MESSAGE);
    assert_eq!(login_failure_message(&ApiError::Status { status: 500, message: None }), LOGIN_REJECTED_MESSAGE);
    assert_eq!(login_failure_message(&ApiError::Network("x".to_owned())), LOGIN_REJECTED_MESSAGE);
}

// =============================================================
// listing
// =============================================================

#[test]
fn load_firmen_returns_backend_list() {
    let api = FakeApi::new().with_firmen(vec![firma(1, "Muster AG", FirmaStatus::Offen)]);
    let session = AdminSession::confirmed("admin".to_owned());
    let firmen = block_on(load_firmen(&api, &session)).unwrap();
    assert_eq!(firmen.len(), 1);
    assert_eq!(api.calls(), vec![Call::ListFirmen]);
}

// =============================================================
// status change
// =============================================================

#[test]
fn status_change_updates_only_that_record_and_signals_once() {
    let api = FakeApi::new().with_token("tok-patch");
    let (bus, hits) = counted_bus();
    let mut state = FirmenState {
        items: vec![
            firma(1, "Muster AG", FirmaStatus::Offen),
            firma(3, "Beispiel GmbH", FirmaStatus::Offen),
            firma(5, "Alpen AG", FirmaStatus::Offen),
        ],
        ..FirmenState::default()
    };
    let before = state.items.clone();

    let id = FirmaId::Number(3);
    let confirmed = block_on(change_status(&api, &bus, &id, FirmaStatus::InArbeit)).unwrap();
    state.apply_status(&id, confirmed);

    assert_eq!(
        api.backend_calls(),
        vec![Call::PatchStatus { id: id.clone(), status: FirmaStatus::InArbeit, token: "tok-patch".to_owned() }]
    );
    assert_eq!(state.items[1].status, FirmaStatus::InArbeit);
    assert_eq!(state.items[0], before[0]);
    assert_eq!(state.items[2], before[2]);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn status_change_failure_publishes_nothing() {
    let api = FakeApi::new().failing(ApiError::Status { status: 500, message: None });
    let (bus, hits) = counted_bus();
    let result = block_on(change_status(&api, &bus, &FirmaId::Number(3), FirmaStatus::Versendet));
    assert_eq!(result, Err(ApiError::Status { status: 500, message: None }));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn status_change_without_token_sends_nothing() {
    let api = FakeApi::new().with_token("");
    let (bus, hits) = counted_bus();
    let result = block_on(change_status(&api, &bus, &FirmaId::Number(3), FirmaStatus::Versendet));
    assert_eq!(result, Err(ApiError::MissingCsrfToken));
    assert!(api.backend_calls().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_sends_token_and_signals() {
    let api = FakeApi::new().with_token("tok-del");
    let (bus, hits) = counted_bus();
    block_on(delete_firma(&api, &bus, &FirmaId::Number(7))).unwrap();
    assert_eq!(api.backend_calls(), vec![Call::Delete { id: FirmaId::Number(7), token: "tok-del".to_owned() }]);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn delete_without_token_sends_nothing() {
    let api = FakeApi::new().with_token("");
    let (bus, _) = counted_bus();
    assert_eq!(block_on(delete_firma(&api, &bus, &FirmaId::Number(7))), Err(ApiError::MissingCsrfToken));
    assert!(api.backend_calls().is_empty());
}

// =============================================================
// failure messages
// =============================================================

#[test]
fn failed_status_change_has_a_user_message() {
    let api = FakeApi::new().failing(ApiError::Status { status: 500, message: None });
    let (bus, _) = counted_bus();
    let err = block_on(change_status(&api, &bus, &FirmaId::Number(3), FirmaStatus::Versendet)).unwrap_err();
    assert_eq!(err.alert_text(STATUS_UPDATE_FAILED_MESSAGE), STATUS_UPDATE_FAILED_MESSAGE);
}

#[test]
fn failed_delete_shows_backend_error_body() {
    let api = FakeApi::new().failing(ApiError::Status { status: 409, message: Some("Firma gesperrt".to_owned()) });
    let (bus, hits) = counted_bus();
    let err = block_on(delete_firma(&api, &bus, &FirmaId::Number(7))).unwrap_err();
    assert_eq!(err.alert_text(DELETE_FAILED_MESSAGE), "Firma gesperrt");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn missing_token_message_wins_over_mutation_fallbacks() {
    let api = FakeApi::new().with_token("");
    let (bus, _) = counted_bus();
    let err = block_on(delete_firma(&api, &bus, &FirmaId::Number(7))).unwrap_err();
    assert_eq!(err.alert_text(DELETE_FAILED_MESSAGE), CSRF_UNAVAILABLE_MESSAGE);
}
