//! # Google sign-in redirect flow
//!
//! The browser is sent to Google's authorization endpoint asking for an
//! `id_token` directly (implicit flow, no client secret). Google redirects
//! back to `/auth/google/callback` with the token in the URL fragment; the
//! token is then exchanged with
//! [`IdentityClient::sign_in_with_google`](super::IdentityClient::sign_in_with_google).
//!
//! Before leaving, the app keeps a [`PendingSignIn`]: a random `state` and
//! `nonce` plus the path to return to. The callback is only accepted when its
//! `state` matches and the id token's `nonce` claim is the one that was sent,
//! so a crafted callback link cannot sign a visitor into someone else's
//! account.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use store::config::IdentityConfig;
use url::Url;

use super::error::{AuthError, AuthErrorCode};

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const SCOPES: &str = "openid email profile";

/// Authorization URL for the Google redirect.
pub fn authorization_url(
    config: &IdentityConfig,
    nonce: &str,
    state: &str,
) -> Result<String, AuthError> {
    if config.google_client_id.trim().is_empty() {
        tracing::error!("Google client id is not configured");
        return Err(AuthError::NotConfigured);
    }
    let mut url = Url::parse(AUTH_URL).map_err(|e| AuthError::Decode(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("client_id", &config.google_client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("response_type", "id_token")
        .append_pair("scope", SCOPES)
        .append_pair("nonce", nonce)
        .append_pair("state", state)
        .append_pair("prompt", "select_account");
    Ok(url.into())
}

/// A Google redirect in flight, kept in browser storage until the callback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PendingSignIn {
    pub state: String,
    pub nonce: String,
    pub return_to: String,
}

impl PendingSignIn {
    pub fn new(return_to: &str) -> Result<Self, AuthError> {
        Ok(Self {
            state: random_token()?,
            nonce: random_token()?,
            return_to: return_to.to_string(),
        })
    }

    pub fn authorization_url(&self, config: &IdentityConfig) -> Result<String, AuthError> {
        authorization_url(config, &self.nonce, &self.state)
    }

    pub fn to_storage(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_storage(stored: &str) -> Option<Self> {
        serde_json::from_str(stored).ok()
    }
}

/// 128 random bits as lowercase hex.
pub fn random_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|e| AuthError::Randomness(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Check the callback fragment against the redirect this browser started.
/// Returns the Google id token to exchange.
pub fn verify_callback(
    pending: Option<&PendingSignIn>,
    fragment: &str,
) -> Result<String, AuthError> {
    let pending = pending.ok_or(AuthError::CallbackMismatch("no sign-in in progress"))?;
    let (id_token, state) = match parse_callback(fragment) {
        Some(GoogleCallback::Token { id_token, state }) => (id_token, state),
        Some(GoogleCallback::Denied(reason)) => {
            return Err(AuthError::Provider(AuthErrorCode::Other(reason)))
        }
        None => return Err(AuthError::Decode("callback carried no id token".to_string())),
    };
    if state.as_deref() != Some(pending.state.as_str()) {
        tracing::warn!("Google callback state does not match");
        return Err(AuthError::CallbackMismatch("state"));
    }
    if token_nonce(&id_token).as_deref() != Some(pending.nonce.as_str()) {
        tracing::warn!("Google id token nonce does not match");
        return Err(AuthError::CallbackMismatch("nonce"));
    }
    Ok(id_token)
}

#[derive(Deserialize)]
struct NonceClaim {
    nonce: Option<String>,
}

/// The `nonce` claim of a JWT. The signature is checked by the identity
/// provider during the exchange, not here.
fn token_nonce(id_token: &str) -> Option<String> {
    let payload = id_token.split('.').nth(1)?;
    let json = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<NonceClaim>(&json).ok()?.nonce
}

/// What Google put in the callback fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum GoogleCallback {
    Token { id_token: String, state: Option<String> },
    Denied(String),
}

/// Parse the callback fragment (with or without the leading `#`).
pub fn parse_callback(fragment: &str) -> Option<GoogleCallback> {
    let mut id_token = None;
    let mut state = None;
    let mut error = None;
    for (key, value) in url::form_urlencoded::parse(fragment.trim_start_matches('#').as_bytes()) {
        match key.as_ref() {
            "id_token" => id_token = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            _ => {}
        }
    }
    match (id_token, error) {
        (Some(id_token), _) => Some(GoogleCallback::Token { id_token, state }),
        (None, Some(error)) => Some(GoogleCallback::Denied(error)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IdentityConfig {
        IdentityConfig {
            google_client_id: "client-1.apps.googleusercontent.com".to_string(),
            ..IdentityConfig::default()
        }
    }

    #[test]
    fn test_authorization_url() {
        let url = authorization_url(&config(), "n0nce", "s-123").unwrap();
        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.host_str(), Some("accounts.google.com"));

        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        let get = |k: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("response_type"), Some("id_token"));
        assert_eq!(get("scope"), Some("openid email profile"));
        assert_eq!(get("state"), Some("s-123"));
        assert_eq!(get("nonce"), Some("n0nce"));
        assert_eq!(
            get("redirect_uri"),
            Some("http://localhost:8080/auth/google/callback")
        );
    }

    #[test]
    fn test_authorization_url_requires_client_id() {
        assert_eq!(
            authorization_url(&IdentityConfig::default(), "n", "/"),
            Err(AuthError::NotConfigured)
        );
    }

    #[test]
    fn test_parse_callback() {
        assert_eq!(
            parse_callback("#state=%2Fshare-tip&id_token=eyJ.abc&authuser=0"),
            Some(GoogleCallback::Token {
                id_token: "eyJ.abc".to_string(),
                state: Some("/share-tip".to_string()),
            })
        );
        assert_eq!(
            parse_callback("error=access_denied&state=%2F"),
            Some(GoogleCallback::Denied("access_denied".to_string()))
        );
        assert_eq!(parse_callback(""), None);
    }

    fn pending() -> PendingSignIn {
        PendingSignIn {
            state: "s-123".to_string(),
            nonce: "n-456".to_string(),
            return_to: "/my-tips".to_string(),
        }
    }

    fn id_token(nonce: &str) -> String {
        let claims = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"42","nonce":"{nonce}"}}"#));
        format!("eyJhbGciOiJSUzI1NiJ9.{claims}.sig")
    }

    #[test]
    fn test_callback_matching_state_and_nonce() {
        let token = id_token("n-456");
        let fragment = format!("state=s-123&id_token={token}");
        assert_eq!(verify_callback(Some(&pending()), &fragment), Ok(token));
    }

    #[test]
    fn test_callback_with_foreign_state_is_rejected() {
        let fragment = format!("state=s-999&id_token={}", id_token("n-456"));
        assert_eq!(
            verify_callback(Some(&pending()), &fragment),
            Err(AuthError::CallbackMismatch("state"))
        );

        let fragment = format!("id_token={}", id_token("n-456"));
        assert_eq!(
            verify_callback(Some(&pending()), &fragment),
            Err(AuthError::CallbackMismatch("state"))
        );
    }

    #[test]
    fn test_callback_with_foreign_nonce_is_rejected() {
        let fragment = format!("state=s-123&id_token={}", id_token("other"));
        assert_eq!(
            verify_callback(Some(&pending()), &fragment),
            Err(AuthError::CallbackMismatch("nonce"))
        );
        assert_eq!(
            verify_callback(Some(&pending()), "state=s-123&id_token=not-a-jwt"),
            Err(AuthError::CallbackMismatch("nonce"))
        );
    }

    #[test]
    fn test_callback_without_pending_sign_in_is_rejected() {
        let fragment = format!("state=s-123&id_token={}", id_token("n-456"));
        assert_eq!(
            verify_callback(None, &fragment),
            Err(AuthError::CallbackMismatch("no sign-in in progress"))
        );
    }

    #[test]
    fn test_pending_sign_in_survives_storage() {
        let stored = PendingSignIn::new("/share-tip").unwrap();
        assert_eq!(stored.state.len(), 32);
        assert_ne!(stored.state, stored.nonce);
        assert_eq!(PendingSignIn::from_storage(&stored.to_storage()), Some(stored));
        assert_eq!(PendingSignIn::from_storage("garbage"), None);
    }
}
