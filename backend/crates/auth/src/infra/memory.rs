//! In-Memory Repositories
//!
//! Process-local credential and session stores. Users are keyed by their
//! sequential id in a `BTreeMap`, which preserves insertion order for
//! iteration. Cloning the repository shares the underlying maps.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{NewUser, Session, User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{Email, UserId, Username};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Inner {
    users: RwLock<BTreeMap<i64, User>>,
    sessions: RwLock<HashMap<Uuid, Session>>,
    next_user_id: AtomicI64,
}

/// In-memory credential and session store
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    inner: Arc<Inner>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, new_user: NewUser) -> AuthResult<User> {
        // Uniqueness check and insert happen under one write guard
        let mut users = self.inner.users.write().await;

        let taken = users.values().any(|u| {
            u.username.as_str() == new_user.username.as_str()
                || u.email.as_str() == new_user.email.as_str()
        });
        if taken {
            return Err(AuthError::UserAlreadyExists);
        }

        let id = self.inner.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = new_user.into_user(UserId::new(id));
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let users = self.inner.users.read().await;
        Ok(users.get(&user_id.as_i64()).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>> {
        let users = self.inner.users.read().await;
        Ok(users
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.inner.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn update_stripe_info(
        &self,
        user_id: UserId,
        customer_id: String,
        subscription_id: Option<String>,
    ) -> AuthResult<User> {
        let mut users = self.inner.users.write().await;
        let user = users
            .get_mut(&user_id.as_i64())
            .ok_or(AuthError::UserNotFound)?;
        user.set_stripe_info(customer_id, subscription_id);
        Ok(user.clone())
    }

    async fn count(&self) -> AuthResult<u64> {
        let users = self.inner.users.read().await;
        Ok(users.len() as u64)
    }
}

impl SessionRepository for MemoryAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.inner.sessions.write().await;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let sessions = self.inner.sessions.read().await;
        Ok(sessions.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        let mut sessions = self.inner.sessions.write().await;
        sessions.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.inner.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}
