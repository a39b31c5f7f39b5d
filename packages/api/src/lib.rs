//! # API crate: REST client for the E-LearnPro backend
//!
//! Everything the frontend knows about the backend lives here. The
//! backend is an external collaborator at a fixed origin; this crate only
//! shapes requests and decodes responses, nothing more.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per backend endpoint, bearer token sourced from an injected [`session::SessionStore`] |
//! | [`error`] | [`ApiError`]: transport failures, backend messages, field-keyed validation payloads |
//! | [`models`] | Wire types: [`Course`], [`AdminStats`], [`UserDetail`], the [`EnrollmentSet`] join |
//!
//! Authenticated requests carry `Authorization: Bearer <token>` whenever
//! the session store holds a token. File-bearing requests (the course
//! thumbnail) are multipart, with a `_method=PUT` override field for
//! update-via-POST.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, ValidationErrors};
pub use models::{
    AdminStats, AuthResponse, Course, CourseDraft, EnrollmentSet, ThumbnailFile, UserDetail,
    UserUpdate,
};
pub use session::{Role, UserRecord};

/// Origin the backend is served from.
pub const BACKEND_ORIGIN: &str = "http://localhost:8000";
