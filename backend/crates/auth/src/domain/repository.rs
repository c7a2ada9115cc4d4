//! Repository Traits
//!
//! Interfaces for the credential store and session store. Implementations
//! live in the infrastructure layer.

use crate::domain::entity::{NewUser, Session, User};
use crate::domain::value_object::{Email, UserId, Username};
use crate::error::AuthResult;
use uuid::Uuid;

/// Credential store trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, assigning the next sequential id.
    ///
    /// The username/email uniqueness check happens atomically inside the
    /// store, under the same lock as the insertion; callers cannot race it.
    /// Fails with `AuthError::UserAlreadyExists` on collision.
    async fn create(&self, new_user: NewUser) -> AuthResult<User>;

    /// Find user by id (owned snapshot)
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>>;

    /// Find user by (lowercased) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Attach Stripe identifiers to an existing user
    async fn update_stripe_info(
        &self,
        user_id: UserId,
        customer_id: String,
        subscription_id: Option<String>,
    ) -> AuthResult<User>;

    /// Total number of users (admin stats)
    async fn count(&self) -> AuthResult<u64>;
}

/// Session store trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a session by id
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session. Idempotent: deleting an unknown id is not an error.
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Remove all expired sessions, returning how many were dropped
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
