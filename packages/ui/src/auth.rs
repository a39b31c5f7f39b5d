//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use session::{SessionStore, UserRecord};

use crate::make_store;

/// Authentication state for the application: the session's cached user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserRecord>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// The initial state is read synchronously from the session store, so the
/// route guard sees the persisted session on the very first render.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| AuthState {
        user: make_store().user(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist a fresh session and publish it to the app.
///
/// Token and user are written together; this is the only place the pair
/// gets stored.
pub fn sign_in(mut auth: Signal<AuthState>, token: &str, user: &UserRecord) {
    make_store().set_session(token, user);
    auth.set(AuthState {
        user: Some(user.clone()),
    });
}

/// Clear the persisted session and publish the sign-out.
pub fn sign_out(mut auth: Signal<AuthState>) {
    make_store().clear_session();
    auth.set(AuthState::default());
}
