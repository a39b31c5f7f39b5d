//! Platform selectors for the session store and API client.
//!
//! - **Web** (WASM + `web` feature): browser localStorage via
//!   [`session::LocalStore`]
//! - **Native** (tests, previews): a process-wide [`session::MemoryStore`]
//!   so session writes stay visible across call sites

use api::ApiClient;
use session::SessionStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn shared_memory_store() -> session::MemoryStore {
    use std::sync::OnceLock;
    static STORE: OnceLock<session::MemoryStore> = OnceLock::new();
    STORE.get_or_init(session::MemoryStore::new).clone()
}

/// Platform-appropriate session store.
pub fn make_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        session::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        shared_memory_store()
    }
}

/// API client wired to the platform session store.
pub fn make_client() -> ApiClient<impl SessionStore> {
    ApiClient::new(make_store())
}
