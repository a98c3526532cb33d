//! # API crate — HTTP clients for GardenHub
//!
//! Everything that leaves the browser goes through this crate. Both clients
//! are built on `reqwest`, so they run on wasm (fetch) and natively (tests).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`rest`] | [`RestBackend`]: the tips and gardeners REST backend, implementing [`store::GardenBackend`] |
//! | [`auth`] | [`IdentityClient`]: email/password and Google sign-in, profile update, token refresh; error-to-message mapping |
//!
//! Both clients are cheap to clone and take their addresses from
//! [`store::GardenHubConfig`].

pub mod auth;
pub mod rest;

pub use auth::{AuthAction, AuthError, AuthErrorCode, AuthSession, IdentityClient, Tokens};
pub use rest::RestBackend;

pub use store::GardenHubConfig;
