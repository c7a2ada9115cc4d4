//! User Entity
//!
//! The credential-store record. Never serialized directly: the HTTP layer
//! maps it to a public DTO, so the password hash cannot leak outward.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{Email, UserId, Username};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Sequential store-assigned identifier
    pub user_id: UserId,
    /// Globally unique login/display name
    pub username: Username,
    /// Globally unique, lowercased
    pub email: Email,
    /// Argon2id PHC hash, never the plaintext
    pub password_hash: HashedPassword,
    /// Defaults to false; never settable through public registration
    pub is_admin: bool,
    /// Attached when a payment customer is created
    pub stripe_customer_id: Option<String>,
    /// Attached when a subscription is created
    pub stripe_subscription_id: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for a user about to be inserted. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub is_admin: bool,
}

impl NewUser {
    /// A regular (non-admin) account, the only shape public registration
    /// can produce.
    pub fn registration(username: Username, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            username,
            email,
            password_hash,
            is_admin: false,
        }
    }

    /// Materialize with a store-assigned id.
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            is_admin: self.is_admin,
            stripe_customer_id: None,
            stripe_subscription_id: None,
            created_at: Utc::now(),
        }
    }
}

impl User {
    /// Attach payment identifiers. An absent subscription id keeps any
    /// previously stored one (customer creation happens before subscription
    /// creation).
    pub fn set_stripe_info(&mut self, customer_id: String, subscription_id: Option<String>) {
        self.stripe_customer_id = Some(customer_id);
        if subscription_id.is_some() {
            self.stripe_subscription_id = subscription_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn sample_user() -> User {
        let hash = ClearTextPassword::new("pw123456".to_string())
            .unwrap()
            .hash()
            .unwrap();
        NewUser::registration(
            Username::new("alice").unwrap(),
            Email::new("alice@x.com").unwrap(),
            hash,
        )
        .into_user(UserId::new(1))
    }

    #[test]
    fn test_registration_is_never_admin() {
        let user = sample_user();
        assert!(!user.is_admin);
        assert!(user.stripe_customer_id.is_none());
        assert!(user.stripe_subscription_id.is_none());
    }

    #[test]
    fn test_set_stripe_info_keeps_existing_subscription() {
        let mut user = sample_user();

        user.set_stripe_info("cus_1".to_string(), Some("sub_1".to_string()));
        assert_eq!(user.stripe_subscription_id.as_deref(), Some("sub_1"));

        // Re-attaching only the customer must not drop the subscription
        user.set_stripe_info("cus_2".to_string(), None);
        assert_eq!(user.stripe_customer_id.as_deref(), Some("cus_2"));
        assert_eq!(user.stripe_subscription_id.as_deref(), Some("sub_1"));
    }
}
