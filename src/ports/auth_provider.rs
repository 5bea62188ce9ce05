//! Auth provider port - the signed-in identity.
//!
//! The identity provider owns sign-in. This port only answers "who is the
//! current user and what token do I forward", packaged as a [`Session`]
//! that is then passed explicitly to the wizard and persistence calls.
//!
//! # Example
//!
//! ```ignore
//! let session = auth_provider.current_session().await?;
//! let controller = WizardController::new(session, deps);
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Session};

/// Supplies the current user's session.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::NotAuthenticated` when nobody is signed in
/// - Return `AuthError::Loading` while the provider is still initializing
/// - Never decode or validate the token; it is opaque here
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn current_session(&self) -> Result<Session, AuthError>;
}
