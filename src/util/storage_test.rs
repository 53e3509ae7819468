use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let store = MemoryStorage::default();
    assert_eq!(store.get("k"), None);
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.set("k", "w");
    assert_eq!(store.get("k").as_deref(), Some("w"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    BrowserStorage.set("isLoggedIn", "true");
    assert_eq!(BrowserStorage.get("isLoggedIn"), None);
}
