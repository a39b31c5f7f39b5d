//! Route-guard decision for protected view trees.
//!
//! A pure, synchronous check over the session contents, evaluated at
//! render time by the layout shells. It is a UX convenience, not a
//! security boundary: a stale or forged client-side record gets past it,
//! and the backend must authorize every API call on its own.

use crate::models::{Role, UserRecord};

/// Outcome of evaluating a protected route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested subtree unchanged.
    Allow,
    /// No user in the session: send to the login view.
    ToLogin,
    /// Role mismatch: send to the public landing view, no message.
    ToHome,
}

/// Decide whether a protected view may render.
///
/// This is the single authorization decision point; layout shells call
/// it once and do not re-derive the check.
pub fn evaluate(user: Option<&UserRecord>, required: Option<Role>) -> GuardDecision {
    let Some(user) = user else {
        return GuardDecision::ToLogin;
    };
    match required {
        Some(role) if user.role != role => GuardDecision::ToHome,
        _ => GuardDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_role(role: Role) -> UserRecord {
        UserRecord {
            id: 1,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role,
            created_at: None,
        }
    }

    #[test]
    fn absent_user_always_goes_to_login() {
        assert_eq!(evaluate(None, None), GuardDecision::ToLogin);
        assert_eq!(evaluate(None, Some(Role::Admin)), GuardDecision::ToLogin);
        assert_eq!(evaluate(None, Some(Role::User)), GuardDecision::ToLogin);
    }

    #[test]
    fn mismatched_role_goes_to_home() {
        let student = with_role(Role::User);
        assert_eq!(
            evaluate(Some(&student), Some(Role::Admin)),
            GuardDecision::ToHome
        );

        let admin = with_role(Role::Admin);
        assert_eq!(
            evaluate(Some(&admin), Some(Role::User)),
            GuardDecision::ToHome
        );
    }

    #[test]
    fn matching_role_renders_the_subtree() {
        let admin = with_role(Role::Admin);
        assert_eq!(
            evaluate(Some(&admin), Some(Role::Admin)),
            GuardDecision::Allow
        );

        let student = with_role(Role::User);
        assert_eq!(
            evaluate(Some(&student), Some(Role::User)),
            GuardDecision::Allow
        );
    }

    #[test]
    fn unknown_role_never_satisfies_a_requirement() {
        let odd = with_role(Role::Unknown);
        assert_eq!(evaluate(Some(&odd), Some(Role::User)), GuardDecision::ToHome);
        assert_eq!(
            evaluate(Some(&odd), Some(Role::Admin)),
            GuardDecision::ToHome
        );
    }

    #[test]
    fn no_required_role_only_needs_a_user() {
        let odd = with_role(Role::Unknown);
        assert_eq!(evaluate(Some(&odd), None), GuardDecision::Allow);
    }
}
