//! Username Value Object
//!
//! A validated login/display name. Uniqueness is enforced by the credential
//! store, not here.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const USERNAME_MIN_LENGTH: usize = 3;
const USERNAME_MAX_LENGTH: usize = 32;

/// Username value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new username with validation
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let name = raw.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        let char_count = name.chars().count();
        if char_count < USERNAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at least {} characters",
                USERNAME_MIN_LENGTH
            )));
        }
        if char_count > USERNAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        {
            return Err(AppError::bad_request(
                "Username may only contain letters, digits, '_', '-' and '.'",
            ));
        }

        // Leading punctuation reads like a glitch in display contexts
        if !name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request(
                "Username must start with a letter or digit",
            ));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Username::new(s)
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        assert!(Username::new("alice").is_ok());
        assert!(Username::new("alice_42").is_ok());
        assert!(Username::new("a-b.c").is_ok());
        assert!(Username::new("  alice  ").is_ok()); // trimmed
    }

    #[test]
    fn test_username_invalid() {
        assert!(Username::new("").is_err());
        assert!(Username::new("ab").is_err());
        assert!(Username::new("a".repeat(33)).is_err());
        assert!(Username::new("has space").is_err());
        assert!(Username::new("_leading").is_err());
        assert!(Username::new("émile").is_err());
    }
}
