use serde::Deserialize;

use crate::BACKEND_ORIGIN;

/// A course as the backend serves it.
///
/// Owned by the backend; the frontend never mutates one without a
/// round-trip. Prices stay strings; the frontend only displays them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub discount_price: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Full course body; enrollment grants access.
    #[serde(default)]
    pub viewer_content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl Course {
    /// Absolute URL of the uploaded thumbnail, if the course has one.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.thumbnail
            .as_ref()
            .map(|file| format!("{BACKEND_ORIGIN}/storage/{file}"))
    }
}

/// A thumbnail picked in the course form, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Form state behind the admin create/edit course modal.
///
/// One draft serves both operations: `id` present means edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseDraft {
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub price: String,
    pub viewer_content: String,
    pub thumbnail: Option<ThumbnailFile>,
}

impl CourseDraft {
    /// Prefill the form from an existing course. The thumbnail stays
    /// empty: uploading is opt-in on edit, keeping the stored file.
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: Some(course.id),
            title: course.title.clone(),
            description: course.description.clone(),
            price: course.price.clone(),
            viewer_content: course.viewer_content.clone().unwrap_or_default(),
            thumbnail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_decodes_with_only_required_fields() {
        let body = r#"{"id":1,"title":"Rust 101","description":"Basics","price":"49.00"}"#;
        let course: Course = serde_json::from_str(body).unwrap();
        assert_eq!(course.id, 1);
        assert!(course.discount_price.is_none());
        assert!(course.thumbnail.is_none());
        assert!(course.thumbnail_url().is_none());
    }

    #[test]
    fn thumbnail_url_points_at_the_storage_origin() {
        let body = r#"{"id":1,"title":"T","description":"D","price":"9.99","thumbnail":"covers/rust.png"}"#;
        let course: Course = serde_json::from_str(body).unwrap();
        assert_eq!(
            course.thumbnail_url().as_deref(),
            Some("http://localhost:8000/storage/covers/rust.png")
        );
    }

    #[test]
    fn draft_from_course_keeps_id_and_drops_stored_thumbnail() {
        let body = r#"{
            "id":5,"title":"T","description":"D","price":"9.99",
            "viewer_content":"Lesson 1","thumbnail":"covers/t.png"
        }"#;
        let course: Course = serde_json::from_str(body).unwrap();
        let draft = CourseDraft::from_course(&course);
        assert_eq!(draft.id, Some(5));
        assert_eq!(draft.viewer_content, "Lesson 1");
        assert!(draft.thumbnail.is_none());
    }
}
