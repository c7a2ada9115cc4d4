//! Current User Use Case
//!
//! Resolves a session token to the owning user record.

use std::sync::Arc;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    check_session: CheckSessionUseCase<S>,
}

impl<U, S> CurrentUserUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            check_session: CheckSessionUseCase::new(session_repo, config),
        }
    }

    /// Resolve the token to its user.
    ///
    /// A live session pointing at a user that no longer exists is an
    /// orphaned session; it reports `UserNotFound` rather than a fake login.
    pub async fn execute(&self, session_token: &str) -> AuthResult<User> {
        let session = self.check_session.get_session(session_token).await?;

        self.user_repo
            .find_by_id(session.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
