//! Browser-side session persistence.
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the web
//! platform. It keeps the bearer token and the serialized user record in
//! `window.localStorage` under the `"token"` and `"user"` keys.
//!
//! All platform errors are swallowed: an unavailable or misbehaving
//! storage area degrades to "no session" rather than crashing the UI, and
//! the backend independently authorizes every call anyway.

use crate::models::UserRecord;
use crate::store::{decode_user, encode_user, SessionStore, TOKEN_KEY, USER_KEY};

/// localStorage-backed SessionStore for the web platform.
///
/// Zero-size and `Clone`-friendly; the storage handle is re-acquired per
/// operation, which the browser makes cheap.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn set_session(&self, token: &str, user: &UserRecord) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &encode_user(user));
    }

    fn token(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn user(&self) -> Option<UserRecord> {
        let raw = Self::storage()?.get_item(USER_KEY).ok().flatten()?;
        decode_user(&raw)
    }

    fn clear_session(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
