//! Check Session Use Case
//!
//! Resolves a session token to a live session. Fails closed: any broken
//! token, missing record, or expired session yields `NotAuthenticated`.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a token to a live session
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = token::verify(session_token, &self.config.session_secret)
            .ok_or(AuthError::NotAuthenticated)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::NotAuthenticated)?;

        // Expiry is checked lazily; expired records are reaped on access
        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::NotAuthenticated);
        }

        Ok(session)
    }

    /// Check whether a token resolves to a live session
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).await.is_ok()
    }
}
