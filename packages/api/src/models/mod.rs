//! Wire types exchanged with the backend.

use serde::Deserialize;
use session::UserRecord;

mod course;
mod enrollment;

pub use course::{Course, CourseDraft, ThumbnailFile};
pub use enrollment::{remove_by_id, EnrollmentSet};

/// Payload of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserRecord,
}

/// `GET /users/{id}` payload: the record plus an enrolled-course summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserDetail {
    pub user: UserRecord,
    #[serde(default)]
    pub courses: Vec<Course>,
}

/// Platform counters for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct AdminStats {
    pub users: u64,
    pub courses: u64,
    pub enrollments: u64,
}

/// Fields for `PUT /users/{id}`.
///
/// Password fields are optional on update; absent fields are not sent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::Role;

    #[test]
    fn user_detail_decodes_without_course_summary() {
        let body = r#"{"user":{"id":4,"name":"Omar","email":"omar@example.com","role":"user"}}"#;
        let detail: UserDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.user.name, "Omar");
        assert_eq!(detail.user.role, Role::User);
        assert!(detail.courses.is_empty());
    }

    #[test]
    fn user_detail_decodes_with_course_summary() {
        let body = r#"{
            "user":{"id":4,"name":"Omar","email":"omar@example.com","role":"user"},
            "courses":[{"id":9,"title":"Rust 101","description":"Basics","price":"19.99"}]
        }"#;
        let detail: UserDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.courses.len(), 1);
        assert_eq!(detail.courses[0].title, "Rust 101");
    }

    #[test]
    fn user_update_omits_absent_password_fields() {
        let update = UserUpdate {
            name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            password: None,
            password_confirmation: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(!json.contains("password"));

        let update = UserUpdate {
            password: Some("hunter22".to_string()),
            password_confirmation: Some("hunter22".to_string()),
            ..update
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("password_confirmation"));
    }
}
