//! Session Entity
//!
//! A server-side session record. Its existence is the sole evidence of
//! authentication; the cookie only carries a signed reference to it.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::UserId;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4), referenced by the signed cookie token
    pub session_id: Uuid,
    /// The authenticated user
    pub user_id: UserId,
    /// Expiration (Unix timestamp ms); checked lazily on access
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session. TTL comes from the application config, not from
    /// a constant here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_is_not_expired() {
        let session = Session::new(UserId::new(1), Duration::hours(24));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_negative_ttl_session_is_expired() {
        let session = Session::new(UserId::new(1), Duration::seconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new(UserId::new(1), Duration::hours(1));
        let b = Session::new(UserId::new(1), Duration::hours(1));
        assert_ne!(a.session_id, b.session_id);
    }
}
