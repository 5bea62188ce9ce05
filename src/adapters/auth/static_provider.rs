//! Fixed-session auth provider.
//!
//! Used by the demo binary and tests in place of a real identity provider.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Session, UserId};
use crate::ports::AuthProvider;

/// Always answers with the same session or the same error.
#[derive(Debug, Clone)]
pub struct StaticAuthProvider {
    outcome: Result<Session, AuthError>,
}

impl StaticAuthProvider {
    pub fn signed_in(session: Session) -> Self {
        Self {
            outcome: Ok(session),
        }
    }

    /// Convenience for a signed-in user with a placeholder token.
    pub fn for_user(user_id: UserId) -> Self {
        Self::signed_in(Session::new(user_id, "local-session"))
    }

    pub fn signed_out() -> Self {
        Self {
            outcome: Err(AuthError::NotAuthenticated),
        }
    }

    /// Forces every lookup to fail with `error`.
    pub fn with_error(error: AuthError) -> Self {
        Self { outcome: Err(error) }
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn current_session(&self) -> Result<Session, AuthError> {
        self.outcome.clone()
    }
}
