//! Login Use Case
//!
//! Authenticates a user by email and password and creates a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::{Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Authenticated user
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Authenticate and open a session.
    ///
    /// Every failure path collapses to `InvalidCredentials`; callers cannot
    /// tell an unknown email from a wrong password.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::new(user.user_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        let session_token = token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user,
        })
    }
}
