//! # Application configuration — `gardenhub.toml`
//!
//! A single source for every external address the client talks to. The web
//! package embeds `gardenhub.toml` at build time and applies build-time
//! environment overrides on top (see [`GardenHubConfig::apply_overrides`]).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [identity]
//! api_key = "..."
//! identity_url = "https://identitytoolkit.googleapis.com/v1"
//! token_url = "https://securetoken.googleapis.com/v1"
//! google_client_id = "..."
//! redirect_uri = "http://localhost:8080/auth/google/callback"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`GardenHubConfig`] | Top-level config with TOML (de)serialisation and the override hook. |
//! | [`ApiConfig`] | Base URL of the tips/gardeners REST backend. |
//! | [`IdentityConfig`] | Identity provider endpoints, API key and Google OAuth client. |
//!
//! Every section has defaults, so a missing or empty file is a valid
//! configuration for local development.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const ENV_API_URL: &str = "GARDENHUB_API_URL";
/// Environment variable overriding [`IdentityConfig::api_key`].
pub const ENV_FIREBASE_API_KEY: &str = "GARDENHUB_FIREBASE_API_KEY";
/// Environment variable overriding [`IdentityConfig::google_client_id`].
pub const ENV_GOOGLE_CLIENT_ID: &str = "GARDENHUB_GOOGLE_CLIENT_ID";
/// Environment variable overriding [`IdentityConfig::redirect_uri`].
pub const ENV_REDIRECT_URI: &str = "GARDENHUB_REDIRECT_URI";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GardenHubConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_identity_url")]
    pub identity_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default)]
    pub google_client_id: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            identity_url: default_identity_url(),
            token_url: default_token_url(),
            google_client_id: String::new(),
            redirect_uri: default_redirect_uri(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_identity_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_token_url() -> String {
    "https://securetoken.googleapis.com/v1".to_string()
}

fn default_redirect_uri() -> String {
    "http://localhost:8080/auth/google/callback".to_string()
}

impl GardenHubConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gardenhub.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.normalize();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Override values from an environment lookup. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(key) = get(ENV_FIREBASE_API_KEY) {
            self.identity.api_key = key;
        }
        if let Some(id) = get(ENV_GOOGLE_CLIENT_ID) {
            self.identity.google_client_id = id;
        }
        if let Some(uri) = get(ENV_REDIRECT_URI) {
            self.identity.redirect_uri = uri;
        }
        self.normalize();
    }

    /// Builder method to set the backend base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        trim_trailing_slash(&mut self.api.base_url);
        trim_trailing_slash(&mut self.identity.identity_url);
        trim_trailing_slash(&mut self.identity.token_url);
    }
}

impl ApiConfig {
    /// Absolute URL for a backend path such as `/browse-tips`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn trim_trailing_slash(url: &mut String) {
    *url = url.trim().trim_end_matches('/').to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = GardenHubConfig::from_toml("").unwrap();
        assert_eq!(config, GardenHubConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_parse_and_normalize() {
        let config = GardenHubConfig::from_toml(
            r#"
            [api]
            base_url = "https://garden.example.com/api/"

            [identity]
            api_key = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://garden.example.com/api");
        assert_eq!(
            config.api.endpoint("/browse-tips"),
            "https://garden.example.com/api/browse-tips"
        );
        assert_eq!(config.identity.api_key, "abc");
        assert_eq!(
            config.identity.identity_url,
            "https://identitytoolkit.googleapis.com/v1"
        );
    }

    #[test]
    fn test_overrides() {
        let mut config = GardenHubConfig::default();
        config.apply_overrides(|key| match key {
            ENV_API_URL => Some("https://api.gardenhub.dev/".to_string()),
            ENV_FIREBASE_API_KEY => Some(String::new()),
            ENV_GOOGLE_CLIENT_ID => Some("client-1".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "https://api.gardenhub.dev");
        assert_eq!(config.identity.api_key, "");
        assert_eq!(config.identity.google_client_id, "client-1");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GardenHubConfig::default().with_base_url("http://127.0.0.1:5000/");
        let text = config.to_toml().unwrap();
        assert_eq!(GardenHubConfig::from_toml(&text).unwrap(), config);
    }
}
