//! Authentication types for the domain layer.
//!
//! A `Session` is the explicit identity handed to the wizard and to
//! persistence calls. It is provider-neutral: whichever identity provider
//! signs the user in populates it through the `AuthProvider` port, and the
//! bearer token is carried along without ever being decoded here.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use super::UserId;

/// Authenticated identity for one wizard session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Stable identifier from the identity provider.
    pub user_id: UserId,

    /// Opaque bearer token forwarded to the persistence backend.
    token: SecretString,
}

impl Session {
    /// Creates a new session from a user id and an opaque token.
    pub fn new(user_id: UserId, token: impl Into<String>) -> Self {
        Self {
            user_id,
            token: SecretString::new(token.into()),
        }
    }

    /// Returns the bearer token for forwarding to a backend.
    pub fn bearer_token(&self) -> &str {
        self.token.expose_secret()
    }
}

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No user is signed in.
    #[error("User not authenticated. Please log in.")]
    NotAuthenticated,

    /// The identity provider has not finished loading the user yet.
    #[error("Authentication is still loading")]
    Loading,

    /// The identity provider could not be reached.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::Loading | AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_exposes_token_only_on_request() {
        let session = Session::new(UserId::new("user_1").unwrap(), "jwt-abc");
        assert_eq!(session.bearer_token(), "jwt-abc");
        assert!(!format!("{:?}", session).contains("jwt-abc"));
    }

    #[test]
    fn not_authenticated_message_asks_for_login() {
        assert_eq!(
            AuthError::NotAuthenticated.to_string(),
            "User not authenticated. Please log in."
        );
    }

    #[test]
    fn loading_and_unavailable_are_transient() {
        assert!(AuthError::Loading.is_transient());
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::NotAuthenticated.is_transient());
    }
}
