//! Authentication against the identity provider.

mod error;
pub mod google;
mod identity;

pub use error::{AuthAction, AuthError, AuthErrorCode};
pub use identity::{AuthSession, IdentityClient, Tokens};
