use crate::models::UserRecord;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// Persisted key-value session storage.
///
/// Token and user are written and removed together; readers get an absent
/// value when a key is missing or its payload fails to parse. The token is
/// opaque to this layer; no expiry or signature checks happen client-side.
pub trait SessionStore {
    /// Persist both halves of the session.
    fn set_session(&self, token: &str, user: &UserRecord);

    /// The raw bearer token, if present.
    fn token(&self) -> Option<String>;

    /// The cached user record, if present and parseable.
    fn user(&self) -> Option<UserRecord>;

    /// Remove both halves of the session.
    fn clear_session(&self);
}

pub(crate) fn encode_user(user: &UserRecord) -> String {
    // UserRecord serialization cannot fail: no maps with non-string keys.
    serde_json::to_string(user).unwrap_or_default()
}

/// A corrupt stored record reads as absent rather than as an error.
pub(crate) fn decode_user(raw: &str) -> Option<UserRecord> {
    serde_json::from_str(raw).ok()
}
