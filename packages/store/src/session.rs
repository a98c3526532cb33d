//! # Session state and route guarding
//!
//! The identity provider owns the session; the client only mirrors it.
//! [`SessionState`] makes the three cases explicit so that no view renders
//! against a session that has not been resolved yet:
//!
//! | State | Meaning |
//! |-------|---------|
//! | [`Unresolved`](SessionState::Unresolved) | The initial session check has not finished. |
//! | [`Anonymous`](SessionState::Anonymous) | Checked; nobody is signed in. |
//! | [`Active`](SessionState::Active) | Checked; a user is signed in. |
//!
//! [`guard`] decides whether a protected path may render, and
//! [`post_login_path`] picks where to go once sign-in succeeds.

use serde::{Deserialize, Serialize};

use crate::models::Tip;

/// Path of the sign-in page.
pub const LOGIN_PATH: &str = "/login";

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl SessionUser {
    /// Display name, falling back to the email address.
    pub fn name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Unresolved,
    Anonymous,
    Active(SessionUser),
}

impl SessionState {
    /// The state after the initial check reported `user`.
    pub fn resolved(user: Option<SessionUser>) -> Self {
        match user {
            Some(user) => SessionState::Active(user),
            None => SessionState::Anonymous,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Unresolved)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Active(user) => Some(user),
            _ => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.user().map(|u| u.email.as_str())
    }

    /// Whether the viewer may see edit/delete affordances on `tip`.
    pub fn owns(&self, tip: &Tip) -> bool {
        self.email().is_some_and(|email| tip.is_authored_by(email))
    }
}

/// Outcome of guarding a protected path.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    /// The session is not resolved yet; render nothing.
    Wait,
    Render,
    /// Send the visitor to sign-in, remembering where they were going.
    Redirect { from: String },
}

/// Decide whether `requested_path` may render for `session`.
pub fn guard(session: &SessionState, requested_path: &str) -> GuardDecision {
    match session {
        SessionState::Unresolved => GuardDecision::Wait,
        SessionState::Active(_) => GuardDecision::Render,
        SessionState::Anonymous => GuardDecision::Redirect {
            from: requested_path.to_string(),
        },
    }
}

/// Where to go after a successful sign-in. Only same-site paths are honoured,
/// and never the sign-in page itself.
pub fn post_login_path(from: &str) -> &str {
    let from = from.trim();
    if from.starts_with('/') && !from.starts_with("//") && !from.starts_with(LOGIN_PATH) {
        from
    } else {
        "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn user() -> SessionUser {
        SessionUser {
            uid: "u1".to_string(),
            email: "ana@example.com".to_string(),
            display_name: Some("Ana".to_string()),
            photo_url: None,
        }
    }

    #[test]
    fn test_guard_waits_until_resolved() {
        assert_eq!(guard(&SessionState::Unresolved, "/my-tips"), GuardDecision::Wait);
    }

    #[test]
    fn test_guard_redirect_then_return_to_requested_path() {
        let session = SessionState::resolved(None);
        let decision = guard(&session, "/my-tips");
        let GuardDecision::Redirect { from } = decision else {
            panic!("expected redirect, got {decision:?}");
        };
        assert_eq!(from, "/my-tips");

        // Sign-in succeeds
        let session = SessionState::resolved(Some(user()));
        assert_eq!(guard(&session, "/my-tips"), GuardDecision::Render);
        assert_eq!(post_login_path(&from), "/my-tips");
    }

    #[test]
    fn test_post_login_path_defaults_home() {
        assert_eq!(post_login_path(""), "/");
        assert_eq!(post_login_path("https://evil.example"), "/");
        assert_eq!(post_login_path("//evil.example"), "/");
        assert_eq!(post_login_path("/login"), "/");
        assert_eq!(post_login_path("/tip/7"), "/tip/7");
    }

    #[test]
    fn test_owns_by_email() {
        let tip: Tip = Tip {
            id: RecordId::from(7),
            title: "t".to_string(),
            plant_type: String::new(),
            difficulty_level: Default::default(),
            category: String::new(),
            description: String::new(),
            image: String::new(),
            status: Default::default(),
            user_name: "Ana".to_string(),
            user_email: "ANA@example.com".to_string(),
            author_name: None,
            author_image: None,
            user_image: None,
            author_email: None,
            availability: None,
            total_liked: 0,
            created_at: None,
        };
        assert!(SessionState::Active(user()).owns(&tip));
        assert!(!SessionState::Anonymous.owns(&tip));
        assert!(!SessionState::Unresolved.owns(&tip));
    }

    #[test]
    fn test_user_name_falls_back_to_email() {
        let mut u = user();
        assert_eq!(u.name(), "Ana");
        u.display_name = Some(String::new());
        assert_eq!(u.name(), "ana@example.com");
    }
}
