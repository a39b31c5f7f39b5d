use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Field-keyed validation messages, as the backend returns them on 422.
///
/// Shaped like `{"errors": {"email": ["The email has already been taken."]}}`.
/// Forms surface only the first message of the first field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// First message of the first field, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.errors
            .values()
            .flat_map(|messages| messages.first())
            .map(String::as_str)
            .next()
    }
}

/// Everything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response carrying a backend-provided message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 422-style response with field-keyed messages.
    #[error("validation failed")]
    Validation(ValidationErrors),
}

impl ApiError {
    /// Build from a non-success status and its raw body.
    ///
    /// Bodies are expected to be `{"message": ...}` or `{"errors": {...}}`;
    /// anything else collapses to a generic per-status message.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct Failure {
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            errors: Option<BTreeMap<String, Vec<String>>>,
        }

        if let Ok(failure) = serde_json::from_str::<Failure>(body) {
            if let Some(errors) = failure.errors {
                if !errors.is_empty() {
                    return ApiError::Validation(ValidationErrors { errors });
                }
            }
            if let Some(message) = failure.message {
                return ApiError::Api { status, message };
            }
        }
        ApiError::Api {
            status,
            message: format!("Request failed with status {status}."),
        }
    }

    /// True for a 404 response, which views render as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }

    /// The message a view should show, with a generic fallback when the
    /// backend gave nothing usable.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Validation(errors) => errors
                .first_message()
                .unwrap_or("Validation failed.")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_surfaced_verbatim() {
        let err = ApiError::from_status_body(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.message(), "Invalid credentials");
        match err {
            ApiError::Api { status, .. } => assert_eq!(status, 401),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn validation_payload_yields_first_field_message() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email has already been taken.", "The email is malformed."],
                "name": ["The name field is required."]
            }
        }"#;
        let err = ApiError::from_status_body(422, body);
        assert_eq!(err.message(), "The email has already been taken.");
    }

    #[test]
    fn empty_errors_object_falls_back_to_message() {
        let err = ApiError::from_status_body(422, r#"{"message":"Nope","errors":{}}"#);
        assert_eq!(err.message(), "Nope");
    }

    #[test]
    fn non_json_body_collapses_to_generic_message() {
        let err = ApiError::from_status_body(500, "<html>Internal Server Error</html>");
        assert_eq!(err.message(), "Request failed with status 500.");
    }

    #[test]
    fn not_found_is_recognized() {
        assert!(ApiError::from_status_body(404, "").is_not_found());
        assert!(!ApiError::from_status_body(403, "").is_not_found());
    }
}
