use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn load_from_empty_storage_is_signed_out() {
    let store = MemoryStorage::default();
    assert_eq!(SessionState::load(&store), SessionState::default());
}

#[test]
fn sign_in_persists_both_keys() {
    let store = MemoryStorage::default();
    let session = SessionState::sign_in(&store, "test@example.com");
    assert!(session.logged_in);
    assert_eq!(store.get("isLoggedIn").as_deref(), Some("true"));
    assert_eq!(store.get("userEmail").as_deref(), Some("test@example.com"));
    assert_eq!(SessionState::load(&store), session);
}

#[test]
fn sign_out_clears_both_keys() {
    let store = MemoryStorage::default();
    SessionState::sign_in(&store, "a@b.com");
    let session = SessionState::sign_out(&store);
    assert!(!session.logged_in);
    assert_eq!(store.get("isLoggedIn"), None);
    assert_eq!(store.get("userEmail"), None);
}

#[test]
fn email_without_flag_is_ignored() {
    let store = MemoryStorage::default();
    store.set("userEmail", "a@b.com");
    store.set("isLoggedIn", "false");
    assert_eq!(SessionState::load(&store), SessionState::default());
}

#[test]
fn display_name_falls_back_to_user() {
    assert_eq!(SessionState::default().display_name(), "User");
    let session = SessionState { logged_in: true, email: Some("jane.doe@x.io".to_owned()) };
    assert_eq!(session.display_name(), "Jane Doe");
}
