use serde::{Deserialize, Serialize};

/// Account role as reported by the backend.
///
/// The backend owns the role vocabulary; anything it sends outside
/// `"admin"` / `"user"` lands in [`Role::Unknown`] instead of failing
/// deserialization, so a stale or surprising record can still be read
/// (and then bounced by the route guard).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached copy of the backend's user record.
///
/// Owned by the backend; the copy held in session storage may go stale
/// relative to it. Views that care about freshness re-fetch `GET /user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values() {
        let admin: Role = serde_json::from_str("\"admin\"").unwrap();
        let user: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(admin, Role::Admin);
        assert_eq!(user, Role::User);
    }

    #[test]
    fn role_maps_unrecognized_values_to_unknown() {
        let role: Role = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn user_record_round_trips_without_created_at() {
        let user = UserRecord {
            id: 7,
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            role: Role::User,
            created_at: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("created_at"));
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
