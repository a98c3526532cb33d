//! HTTP clients shared through context.
//!
//! The web entry point builds one [`Clients`] from the resolved
//! [`store::GardenHubConfig`] and provides it at the root; views reach the
//! backend with [`use_backend`] and the identity provider with
//! [`use_identity`].

use api::{IdentityClient, RestBackend};
use dioxus::prelude::*;
use store::GardenHubConfig;

#[derive(Clone, Debug)]
pub struct Clients {
    pub backend: RestBackend,
    pub identity: IdentityClient,
}

impl Clients {
    pub fn new(config: &GardenHubConfig) -> Self {
        tracing::debug!("Backend at {}", config.api.base_url);
        Self {
            backend: make_backend(config),
            identity: IdentityClient::new(config.identity.clone()),
        }
    }
}

/// Create the REST backend for `config`.
pub fn make_backend(config: &GardenHubConfig) -> RestBackend {
    RestBackend::new(config.api.clone())
}

pub fn use_backend() -> RestBackend {
    use_context::<Clients>().backend
}

pub fn use_identity() -> IdentityClient {
    use_context::<Clients>().identity
}
