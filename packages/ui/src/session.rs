//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] resolves the session once on mount (stored refresh
//! token → fresh tokens → profile) and withholds its children until that
//! check has finished. Afterwards [`use_session`] gives views the current
//! [`SessionState`] plus the credential operations.

use api::auth::google::{self, PendingSignIn};
use api::{AuthAction, AuthError, AuthErrorCode, AuthSession, IdentityClient, Tokens};
use dioxus::prelude::*;
use store::forms::CredentialsError;
use store::session::post_login_path;
use store::{RegistrationForm, SessionState, SessionUser, SignInForm};

use crate::backend::use_identity;
use crate::storage::{self, GOOGLE_SIGN_IN_KEY, REFRESH_TOKEN_KEY};
use crate::LoadingSpinner;

/// Failure of a credential operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] CredentialsError),
    #[error("{action:?} failed: {source}")]
    Auth { action: AuthAction, source: AuthError },
}

impl SessionError {
    fn auth(action: AuthAction) -> impl FnOnce(AuthError) -> Self {
        move |source| SessionError::Auth { action, source }
    }

    /// Toast text for this failure.
    pub fn message(&self) -> String {
        match self {
            SessionError::Invalid(e) => e.to_string(),
            SessionError::Auth { action, source } => source.user_message(*action).to_string(),
        }
    }
}

/// The session as seen by views.
#[derive(Clone)]
pub struct SessionContext {
    state: Signal<SessionState>,
    tokens: Signal<Option<Tokens>>,
    identity: IdentityClient,
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

impl SessionContext {
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.state.read().user().cloned()
    }

    fn commit(&self, session: AuthSession) -> SessionUser {
        let mut state = self.state;
        let mut tokens = self.tokens;
        storage::save(REFRESH_TOKEN_KEY, &session.tokens.refresh_token);
        tokens.set(Some(session.tokens));
        state.set(SessionState::Active(session.user.clone()));
        session.user
    }

    pub async fn sign_in(&self, form: SignInForm) -> Result<SessionUser, SessionError> {
        form.validate()?;
        let session = self
            .identity
            .sign_in(form.email.trim(), &form.password)
            .await
            .map_err(SessionError::auth(AuthAction::SignIn))?;
        Ok(self.commit(session))
    }

    /// Create the account, then set its display name and photo. The account
    /// stays signed in when only the profile step fails.
    pub async fn register(&self, form: RegistrationForm) -> Result<SessionUser, SessionError> {
        form.validate()?;
        let session = self
            .identity
            .sign_up(form.email.trim(), &form.password)
            .await
            .map_err(SessionError::auth(AuthAction::SignUp))?;
        self.commit(session);

        self.update_profile(form.name.trim(), form.photo_url.trim())
            .await
            .inspect_err(|e| tracing::warn!("Profile update failed after sign-up: {e}"))
    }

    /// Set the signed-in user's display name and photo URL.
    pub async fn update_profile(
        &self,
        name: &str,
        photo_url: &str,
    ) -> Result<SessionUser, SessionError> {
        let failed = SessionError::auth(AuthAction::UpdateProfile);
        let Some(mut tokens) = (self.tokens)() else {
            return Err(failed(AuthError::Provider(AuthErrorCode::InvalidIdToken)));
        };
        let user = self
            .identity
            .update_profile(&mut tokens, name, photo_url)
            .await
            .map_err(failed)?;
        Ok(self.commit(AuthSession { user, tokens }))
    }

    /// Leave for Google's consent page; sign-in completes on the callback
    /// route. `from` is where to land afterwards.
    pub fn begin_google_sign_in(&self, from: &str) -> Result<(), SessionError> {
        let failed = SessionError::auth(AuthAction::GoogleSignIn);
        let pending = PendingSignIn::new(post_login_path(from)).map_err(failed)?;
        let url = pending
            .authorization_url(self.identity.config())
            .map_err(SessionError::auth(AuthAction::GoogleSignIn))?;
        storage::save(GOOGLE_SIGN_IN_KEY, &pending.to_storage());
        redirect_to(&url);
        Ok(())
    }

    /// Finish the Google redirect. Returns the path to continue to.
    pub async fn complete_google_sign_in(&self, fragment: &str) -> Result<String, SessionError> {
        let failed = SessionError::auth(AuthAction::GoogleSignIn);
        // Single use, whatever the outcome
        let pending = storage::load(GOOGLE_SIGN_IN_KEY)
            .as_deref()
            .and_then(PendingSignIn::from_storage);
        storage::remove(GOOGLE_SIGN_IN_KEY);

        let id_token = google::verify_callback(pending.as_ref(), fragment).map_err(failed)?;
        let session = self
            .identity
            .sign_in_with_google(&id_token)
            .await
            .map_err(SessionError::auth(AuthAction::GoogleSignIn))?;
        self.commit(session);
        let return_to = pending.map(|p| p.return_to).unwrap_or_default();
        Ok(post_login_path(&return_to).to_string())
    }

    pub fn sign_out(&self) {
        let mut state = self.state;
        let mut tokens = self.tokens;
        storage::remove(REFRESH_TOKEN_KEY);
        tokens.set(None);
        state.set(SessionState::Anonymous);
        tracing::info!("Signed out");
    }
}

/// Provider component that resolves and owns the session.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let identity = use_identity();
    let mut state = use_signal(SessionState::default);
    let mut tokens = use_signal(|| None::<Tokens>);

    let context = use_context_provider(|| SessionContext {
        state,
        tokens,
        identity: identity.clone(),
    });

    // Initial session check, once on mount
    let _ = use_resource(move || {
        let identity = context.identity.clone();
        async move {
            let Some(refresh_token) = storage::load(REFRESH_TOKEN_KEY) else {
                state.set(SessionState::Anonymous);
                return;
            };
            match identity.restore(&refresh_token).await {
                Ok(session) => {
                    storage::save(REFRESH_TOKEN_KEY, &session.tokens.refresh_token);
                    tokens.set(Some(session.tokens));
                    state.set(SessionState::resolved(Some(session.user)));
                }
                Err(e) => {
                    tracing::warn!("Could not restore session: {e}");
                    if e.ends_session() {
                        storage::remove(REFRESH_TOKEN_KEY);
                    }
                    state.set(SessionState::resolved(None));
                }
            }
        }
    });

    if !state.read().is_resolved() {
        return rsx! {
            div { class: "session-pending", LoadingSpinner {} }
        };
    }

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to(url: &str) {
    tracing::info!("Open {url} to continue signing in");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let invalid = SessionError::from(CredentialsError::MissingFields);
        assert_eq!(invalid.message(), "Please fill in all fields");

        let wrong = SessionError::Auth {
            action: AuthAction::SignIn,
            source: AuthError::Provider(AuthErrorCode::InvalidPassword),
        };
        assert_eq!(wrong.message(), "Incorrect email or password");

        let profile = SessionError::Auth {
            action: AuthAction::UpdateProfile,
            source: AuthError::Network("offline".to_string()),
        };
        assert_eq!(profile.message(), "Failed to update profile");
    }
}
