//! Logout Use Case
//!
//! Destroys the server-side session referenced by a token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Destroy the session. Idempotent: an invalid, expired, or already
    /// destroyed token still results in success.
    pub async fn execute(&self, session_token: &str) -> AuthResult<()> {
        let Some(session_id) = token::verify(session_token, &self.config.session_secret) else {
            return Ok(());
        };

        self.session_repo.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "Session destroyed");

        Ok(())
    }
}
