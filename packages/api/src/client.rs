use reqwest::multipart;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use session::{SessionStore, UserRecord};

use crate::error::ApiError;
use crate::models::{AdminStats, AuthResponse, Course, CourseDraft, UserDetail, UserUpdate};
use crate::BACKEND_ORIGIN;

/// Some endpoints wrap the record: `{"user": {...}}`.
#[derive(Deserialize)]
struct UserEnvelope {
    user: UserRecord,
}

/// HTTP client for the backend, with the session store injected.
///
/// Every call that needs authentication sources its bearer token from the
/// store at request time; the client itself holds no session state. No
/// retry, backoff, or timeout: a failed request surfaces once.
#[derive(Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    origin: String,
    session: S,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(session: S) -> Self {
        Self::with_base(BACKEND_ORIGIN, session)
    }

    /// Override the backend origin (tests, alternate deployments).
    pub fn with_base(origin: impl Into<String>, session: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into(),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api{}", self.origin, path);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status_body(status.as_u16(), &body))
        }
    }

    async fn expect_ok(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status_body(status.as_u16(), &body))
        }
    }

    // --- authentication ---

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, "/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, "/register")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- current user ---

    pub async fn current_user(&self) -> Result<UserRecord, ApiError> {
        let response = self.request(Method::GET, "/user").send().await?;
        Self::decode(response).await
    }

    pub async fn update_profile(&self, name: &str, email: &str) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, "/user")
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn change_password(
        &self,
        current: &str,
        new: &str,
        confirmation: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, "/user/password")
            .json(&json!({
                "current_password": current,
                "new_password": new,
                "new_password_confirmation": confirmation,
            }))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    // --- courses ---

    pub async fn courses(&self) -> Result<Vec<Course>, ApiError> {
        let response = self.request(Method::GET, "/courses").send().await?;
        Self::decode(response).await
    }

    pub async fn course(&self, id: u64) -> Result<Course, ApiError> {
        let response = self
            .request(Method::GET, &format!("/courses/{id}"))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn course_users(&self, id: u64) -> Result<Vec<UserRecord>, ApiError> {
        let response = self
            .request(Method::GET, &format!("/courses/{id}/users"))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Create or update a course from the admin form.
    ///
    /// Always multipart because of the optional thumbnail; updates go
    /// through POST with a `_method=PUT` override field, which is how the
    /// backend accepts file uploads on update.
    pub async fn save_course(&self, draft: &CourseDraft) -> Result<(), ApiError> {
        let mut form = multipart::Form::new()
            .text("title", draft.title.clone())
            .text("description", draft.description.clone())
            .text("price", draft.price.clone())
            .text("viewer_content", draft.viewer_content.clone());

        if let Some(ref thumbnail) = draft.thumbnail {
            let part = multipart::Part::bytes(thumbnail.bytes.clone())
                .file_name(thumbnail.file_name.clone());
            form = form.part("thumbnail", part);
        }

        let path = match draft.id {
            Some(id) => {
                form = form.text("_method", "PUT");
                format!("/courses/{id}")
            }
            None => "/courses".to_string(),
        };

        let response = self
            .request(Method::POST, &path)
            .multipart(form)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn delete_course(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/courses/{id}"))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    // --- enrollment ---

    pub async fn my_courses(&self) -> Result<Vec<Course>, ApiError> {
        let response = self.request(Method::GET, "/my-courses").send().await?;
        Self::decode(response).await
    }

    pub async fn enroll(&self, course_id: u64) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, "/enroll")
            .json(&json!({ "course_id": course_id }))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn unenroll(&self, course_id: u64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/courses/{course_id}/unenroll"))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    // --- user management ---

    pub async fn users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let response = self.request(Method::GET, "/users").send().await?;
        Self::decode(response).await
    }

    pub async fn user_detail(&self, id: u64) -> Result<UserDetail, ApiError> {
        let response = self
            .request(Method::GET, &format!("/users/{id}"))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn update_user(&self, id: u64, update: &UserUpdate) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, &format!("/users/{id}"))
            .json(update)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/users/{id}"))
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    // --- admin ---

    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        let response = self.request(Method::GET, "/admin/stats").send().await?;
        Self::decode(response).await
    }

    /// Update the admin's own profile; the backend echoes the fresh record.
    pub async fn admin_update_profile(&self, update: &UserUpdate) -> Result<UserRecord, ApiError> {
        let response = self
            .request(Method::PUT, "/admin/update-profile")
            .json(update)
            .send()
            .await?;
        let envelope: UserEnvelope = Self::decode(response).await?;
        Ok(envelope.user)
    }
}
