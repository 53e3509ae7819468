//! Signed-in flag and email, mirrored to localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header reads the session on mount; the auth modal writes it after a
//! successful login or OTP verification; the profile dropdown clears it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{STORAGE_KEY_LOGGED_IN, STORAGE_KEY_USER_EMAIL};
use crate::util::avatar::display_name_from_email;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub email: Option<String>,
}

impl SessionState {
    /// Read the persisted flags. A stored email without the flag is ignored.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let logged_in = store.get(STORAGE_KEY_LOGGED_IN).is_some_and(|v| v == "true");
        if !logged_in {
            return Self::default();
        }
        let email = store.get(STORAGE_KEY_USER_EMAIL).filter(|e| !e.is_empty());
        Self { logged_in, email }
    }

    /// Persist both keys and return the signed-in session.
    pub fn sign_in(store: &impl KeyValueStore, email: &str) -> Self {
        store.set(STORAGE_KEY_LOGGED_IN, "true");
        store.set(STORAGE_KEY_USER_EMAIL, email);
        log::info!("signed in as {email}");
        Self { logged_in: true, email: Some(email.to_owned()) }
    }

    /// Remove both keys and return the signed-out session.
    pub fn sign_out(store: &impl KeyValueStore) -> Self {
        store.remove(STORAGE_KEY_LOGGED_IN);
        store.remove(STORAGE_KEY_USER_EMAIL);
        log::info!("signed out");
        Self::default()
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn display_name(&self) -> String {
        match &self.email {
            Some(email) => display_name_from_email(email),
            None => "User".to_owned(),
        }
    }
}
