use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::UserRecord;
use crate::store::{decode_user, encode_user, SessionStore, TOKEN_KEY, USER_KEY};

/// In-memory SessionStore for testing and non-browser builds.
///
/// Values are kept as strings under the same keys the browser store uses,
/// so the two implementations share one serialization path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn set_session(&self, token: &str, user: &UserRecord) {
        let mut values = self.values.lock().unwrap();
        values.insert(TOKEN_KEY.to_string(), token.to_string());
        values.insert(USER_KEY.to_string(), encode_user(user));
    }

    fn token(&self) -> Option<String> {
        self.values.lock().unwrap().get(TOKEN_KEY).cloned()
    }

    fn user(&self) -> Option<UserRecord> {
        let values = self.values.lock().unwrap();
        decode_user(values.get(USER_KEY)?)
    }

    fn clear_session(&self) {
        let mut values = self.values.lock().unwrap();
        values.remove(TOKEN_KEY);
        values.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn student() -> UserRecord {
        UserRecord {
            id: 3,
            name: "Lina".to_string(),
            email: "lina@example.com".to_string(),
            role: Role::User,
            created_at: Some("2023-01-14T09:30:00Z".to_string()),
        }
    }

    #[test]
    fn set_session_persists_both_halves() {
        let store = MemoryStore::new();
        assert!(store.token().is_none());
        assert!(store.user().is_none());

        store.set_session("tok-123", &student());

        assert_eq!(store.token().as_deref(), Some("tok-123"));
        assert_eq!(store.user(), Some(student()));
    }

    #[test]
    fn clear_session_removes_both_halves() {
        let store = MemoryStore::new();
        store.set_session("tok-123", &student());

        store.clear_session();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn corrupt_user_payload_reads_as_absent() {
        let store = MemoryStore::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(USER_KEY.to_string(), "{not valid json".to_string());

        assert!(store.user().is_none());
    }

    #[test]
    fn token_without_user_is_still_readable() {
        // The invariant is enforced by writers; readers stay independent.
        let store = MemoryStore::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(TOKEN_KEY.to_string(), "orphan".to_string());

        assert_eq!(store.token().as_deref(), Some("orphan"));
        assert!(store.user().is_none());
    }
}
