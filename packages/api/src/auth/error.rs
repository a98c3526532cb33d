//! Identity provider failures and the messages shown for them.

use serde::Deserialize;

/// Error code reported by the identity provider in `error.message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthErrorCode {
    EmailNotFound,
    InvalidPassword,
    InvalidCredentials,
    UserDisabled,
    TooManyAttempts,
    EmailExists,
    WeakPassword,
    InvalidIdToken,
    TokenExpired,
    InvalidRefreshToken,
    Other(String),
}

impl AuthErrorCode {
    /// Parse a provider message such as `"WEAK_PASSWORD : Password should be at
    /// least 6 characters"`. Only the code before `" : "` is significant.
    pub fn from_message(message: &str) -> Self {
        let code = message.split(" : ").next().unwrap_or_default().trim();
        match code {
            "EMAIL_NOT_FOUND" => Self::EmailNotFound,
            "INVALID_PASSWORD" => Self::InvalidPassword,
            "INVALID_LOGIN_CREDENTIALS" => Self::InvalidCredentials,
            "USER_DISABLED" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyAttempts,
            "EMAIL_EXISTS" => Self::EmailExists,
            "WEAK_PASSWORD" => Self::WeakPassword,
            "INVALID_ID_TOKEN" => Self::InvalidIdToken,
            "TOKEN_EXPIRED" | "USER_NOT_FOUND" => Self::TokenExpired,
            "INVALID_REFRESH_TOKEN" => Self::InvalidRefreshToken,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this code means the stored session can no longer be used.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdToken | Self::TokenExpired | Self::InvalidRefreshToken | Self::UserDisabled
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("identity provider rejected the request: {0:?}")]
    Provider(AuthErrorCode),
    #[error("identity provider unreachable: {0}")]
    Network(String),
    #[error("unexpected identity provider response: {0}")]
    Decode(String),
    #[error("identity provider is not configured")]
    NotConfigured,
    #[error("sign-in callback does not belong to this browser: {0}")]
    CallbackMismatch(&'static str),
    #[error("could not generate a random value: {0}")]
    Randomness(String),
}

/// What the user was trying to do, for picking the message to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    SignIn,
    SignUp,
    GoogleSignIn,
    UpdateProfile,
}

impl AuthAction {
    fn fallback(self) -> &'static str {
        match self {
            AuthAction::SignIn => "Failed to login",
            AuthAction::SignUp => "Failed to create an account",
            AuthAction::GoogleSignIn => "Failed to login with Google",
            AuthAction::UpdateProfile => "Failed to update profile",
        }
    }
}

impl AuthError {
    /// The toast text for this failure.
    pub fn user_message(&self, action: AuthAction) -> &'static str {
        match self {
            AuthError::Provider(code) => match code {
                AuthErrorCode::EmailNotFound
                | AuthErrorCode::InvalidPassword
                | AuthErrorCode::InvalidCredentials => "Incorrect email or password",
                AuthErrorCode::TooManyAttempts => {
                    "Too many failed login attempts. Please try again later"
                }
                AuthErrorCode::EmailExists => "Email already in use",
                AuthErrorCode::UserDisabled => "This account has been disabled",
                _ => action.fallback(),
            },
            _ => action.fallback(),
        }
    }

    /// Whether a stored session should be discarded after this failure.
    pub fn ends_session(&self) -> bool {
        matches!(self, AuthError::Provider(code) if code.ends_session())
    }
}

/// `{"error": {"code": 400, "message": "EMAIL_EXISTS"}}`
#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map an error response body to an [`AuthError`].
pub(crate) fn from_body(body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AuthError::Provider(AuthErrorCode::from_message(&envelope.error.message)),
        Err(e) => AuthError::Decode(e.to_string()),
    }
}
