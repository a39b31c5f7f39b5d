//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_client, make_store};

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthState};

mod sidebar;
pub use sidebar::{Sidebar, SidebarLink};
