//! # Identity provider client
//!
//! Talks to a Firebase-compatible Identity Toolkit over its REST API. Every
//! successful credential operation returns an [`AuthSession`]: the user as the
//! provider reports it plus the token pair the client keeps.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`sign_up`](IdentityClient::sign_up) | `accounts:signUp` |
//! | [`sign_in`](IdentityClient::sign_in) | `accounts:signInWithPassword` |
//! | [`sign_in_with_google`](IdentityClient::sign_in_with_google) | `accounts:signInWithIdp` |
//! | [`update_profile`](IdentityClient::update_profile) | `accounts:update` |
//! | [`lookup`](IdentityClient::lookup) | `accounts:lookup` |
//! | [`refresh`](IdentityClient::refresh) | secure-token `/token` |
//!
//! The refresh token is what survives a reload; [`restore`](IdentityClient::restore)
//! turns it back into a session.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::config::IdentityConfig;
use store::SessionUser;

use super::error::{from_body, AuthError};

/// Provider id the identity toolkit expects for Google credentials.
const GOOGLE_PROVIDER: &str = "google.com";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tokens {
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub user: SessionUser,
    pub tokens: Tokens,
}

/// Common shape of the `accounts:*` credential responses.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl AccountResponse {
    fn user(&self) -> SessionUser {
        SessionUser {
            uid: self.local_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone().filter(|n| !n.is_empty()),
            photo_url: self.photo_url.clone().filter(|p| !p.is_empty()),
        }
    }

    fn into_session(self) -> Result<AuthSession, AuthError> {
        let user = self.user();
        match (self.id_token, self.refresh_token) {
            (Some(id_token), Some(refresh_token)) => Ok(AuthSession {
                user,
                tokens: Tokens {
                    id_token,
                    refresh_token,
                },
            }),
            _ => Err(AuthError::Decode("response carried no tokens".to_string())),
        }
    }
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountResponse>,
}

/// The secure-token endpoint answers in snake_case.
#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: String,
    request_uri: &'a str,
    return_secure_token: bool,
    return_idp_credential: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    photo_url: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Clone, Debug)]
pub struct IdentityClient {
    client: Client,
    config: IdentityConfig,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    fn ensure_configured(&self) -> Result<(), AuthError> {
        if self.config.api_key.trim().is_empty() {
            tracing::error!("Identity provider API key is not configured");
            return Err(AuthError::NotConfigured);
        }
        Ok(())
    }

    fn accounts_url(&self, operation: &str) -> String {
        format!(
            "{}/accounts:{operation}?key={}",
            self.config.identity_url, self.config.api_key
        )
    }

    async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        self.ensure_configured()?;
        tracing::debug!("identity accounts:{operation}");
        let response = self
            .client
            .post(self.accounts_url(operation))
            .json(body)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    /// Create an account with email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let account: AccountResponse = self
            .call(
                "signUp",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        tracing::info!("Created account {}", account.email);
        account.into_session()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let account: AccountResponse = self
            .call(
                "signInWithPassword",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        tracing::info!("Signed in {}", account.email);
        account.into_session()
    }

    /// Exchange a Google id token obtained from the redirect flow.
    pub async fn sign_in_with_google(&self, google_id_token: &str) -> Result<AuthSession, AuthError> {
        let post_body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("id_token", google_id_token)
            .append_pair("providerId", GOOGLE_PROVIDER)
            .finish();
        let account: AccountResponse = self
            .call(
                "signInWithIdp",
                &IdpRequest {
                    post_body,
                    request_uri: &self.config.redirect_uri,
                    return_secure_token: true,
                    return_idp_credential: true,
                },
            )
            .await?;
        tracing::info!("Signed in {} with Google", account.email);
        account.into_session()
    }

    /// Set display name and photo URL. Returns the updated user; the
    /// provider may rotate tokens, in which case `tokens` is replaced.
    pub async fn update_profile(
        &self,
        tokens: &mut Tokens,
        display_name: &str,
        photo_url: &str,
    ) -> Result<SessionUser, AuthError> {
        let account: AccountResponse = self
            .call(
                "update",
                &UpdateRequest {
                    id_token: &tokens.id_token,
                    display_name,
                    photo_url,
                    return_secure_token: true,
                },
            )
            .await?;
        let user = account.user();
        if let (Some(id_token), Some(refresh_token)) = (account.id_token, account.refresh_token) {
            *tokens = Tokens {
                id_token,
                refresh_token,
            };
        }
        Ok(user)
    }

    /// The profile behind an id token.
    pub async fn lookup(&self, id_token: &str) -> Result<SessionUser, AuthError> {
        let response: LookupResponse = self.call("lookup", &LookupRequest { id_token }).await?;
        response
            .users
            .first()
            .map(AccountResponse::user)
            .ok_or_else(|| AuthError::Decode("lookup returned no user".to_string()))
    }

    /// Trade a refresh token for a fresh token pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Tokens, AuthError> {
        self.ensure_configured()?;
        let url = format!("{}/token?key={}", self.config.token_url, self.config.api_key);
        tracing::debug!("identity token refresh");
        let response = self
            .client
            .post(url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await
            .map_err(network)?;
        let refreshed: RefreshResponse = decode(response).await?;
        Ok(Tokens {
            id_token: refreshed.id_token,
            refresh_token: refreshed.refresh_token,
        })
    }

    /// Rebuild a session from a stored refresh token.
    pub async fn restore(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let tokens = self.refresh(refresh_token).await?;
        let user = self.lookup(&tokens.id_token).await?;
        tracing::info!("Restored session for {}", user.email);
        Ok(AuthSession { user, tokens })
    }
}

fn network(e: reqwest::Error) -> AuthError {
    AuthError::Network(e.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    if !status.is_success() {
        let error = from_body(&body);
        tracing::warn!("Identity provider returned {status}: {error}");
        return Err(error);
    }
    serde_json::from_str(&body).map_err(|e| AuthError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::{AuthAction, AuthErrorCode};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client(server: &MockServer) -> IdentityClient {
        IdentityClient::new(IdentityConfig {
            api_key: "test-key".to_string(),
            identity_url: format!("{}/v1", server.uri()),
            token_url: format!("{}/st", server.uri()),
            google_client_id: "client-1".to_string(),
            redirect_uri: "http://localhost:8080/auth/google/callback".to_string(),
        })
    }

    fn account(id_token: &str) -> serde_json::Value {
        json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "uid-1",
            "email": "ana@example.com",
            "displayName": "Ana",
            "idToken": id_token,
            "refreshToken": "refresh-1",
            "expiresIn": "3600"
        })
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "email": "ana@example.com",
                "password": "Secret#123",
                "returnSecureToken": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(account("id-1")))
            .expect(1)
            .mount(&server)
            .await;

        let session = client(&server)
            .sign_in("ana@example.com", "Secret#123")
            .await
            .unwrap();
        assert_eq!(session.user.uid, "uid-1");
        assert_eq!(session.user.name(), "Ana");
        assert_eq!(session.tokens.id_token, "id-1");
        assert_eq!(session.tokens.refresh_token, "refresh-1");
    }

    #[tokio::test]
    async fn test_sign_in_rejected() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS", "errors": []}
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "EMAIL_EXISTS"}
            })))
            .mount(&server)
            .await;

        let identity = client(&server);
        let error = identity
            .sign_in("ana@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(
            error,
            AuthError::Provider(AuthErrorCode::InvalidCredentials)
        );
        assert_eq!(
            error.user_message(AuthAction::SignIn),
            "Incorrect email or password"
        );

        let error = identity
            .sign_up("ana@example.com", "Secret#123")
            .await
            .unwrap_err();
        assert_eq!(error.user_message(AuthAction::SignUp), "Email already in use");
    }

    #[tokio::test]
    async fn test_restore_refreshes_then_looks_up() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/st/token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=stored-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_token": "id-2",
                "refresh_token": "refresh-2",
                "expires_in": "3600",
                "user_id": "uid-1"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:lookup"))
            .and(body_json(json!({"idToken": "id-2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [{"localId": "uid-1", "email": "ana@example.com", "photoUrl": "https://example.com/a.png"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = client(&server).restore("stored-1").await.unwrap();
        assert_eq!(session.tokens.refresh_token, "refresh-2");
        assert_eq!(session.user.email, "ana@example.com");
        assert_eq!(session.user.display_name, None);
        assert_eq!(
            session.user.photo_url.as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[tokio::test]
    async fn test_expired_refresh_token_ends_session() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/st/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"code": 400, "message": "TOKEN_EXPIRED"}
            })))
            .mount(&server)
            .await;

        let error = client(&server).restore("stale").await.unwrap_err();
        assert!(error.ends_session());
    }

    #[tokio::test]
    async fn test_google_exchange_and_profile_update() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithIdp"))
            .and(body_string_contains("id_token=google-token"))
            .and(body_string_contains("providerId=google.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(account("id-g")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:update"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": "uid-1",
                "email": "ana@example.com",
                "displayName": "Ana Gardener",
                "photoUrl": "https://example.com/ana.png",
                "idToken": "id-3",
                "refreshToken": "refresh-3"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let identity = client(&server);
        let mut session = identity.sign_in_with_google("google-token").await.unwrap();
        assert_eq!(session.tokens.id_token, "id-g");

        let user = identity
            .update_profile(&mut session.tokens, "Ana Gardener", "https://example.com/ana.png")
            .await
            .unwrap();
        assert_eq!(user.name(), "Ana Gardener");
        assert_eq!(session.tokens.id_token, "id-3");
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let identity = IdentityClient::new(IdentityConfig::default());
        assert_eq!(
            identity.sign_in("a@example.com", "x").await,
            Err(AuthError::NotConfigured)
        );
        assert_eq!(identity.refresh("r").await, Err(AuthError::NotConfigured));
    }
}
