//! Register Use Case
//!
//! Creates a user account and logs the new user straight in.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::{NewUser, Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{Email, Username};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Created user
    pub user: User,
}

/// Register use case
pub struct RegisterUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> RegisterUseCase<U, S>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate inputs before touching the store
        let username =
            Username::new(&input.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email = Email::new(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Uniqueness is enforced inside the store, atomically with the insert
        let user = self
            .user_repo
            .create(NewUser::registration(username, email, password_hash))
            .await?;

        // Registration doubles as login
        let session = Session::new(user.user_id, self.config.session_ttl_chrono());
        self.session_repo.create(&session).await?;

        let session_token = token::issue(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            session_token,
            user,
        })
    }
}
