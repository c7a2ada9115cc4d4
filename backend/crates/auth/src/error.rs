//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration collided with an existing username or email.
    /// Folded into a 400 validation failure at the boundary.
    #[error("User already exists")]
    UserAlreadyExists,

    /// Wrong password or unknown email. Deliberately a single variant so the
    /// two cases are indistinguishable to the caller.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No valid session on a request that expected one
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Guard rejection: missing/invalid session on a protected route
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Guard rejection: authenticated but not an admin
    #[error("Admin access required")]
    AdminRequired,

    /// Session resolved but the referenced user no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Malformed input (username, email, or password policy)
    #[error("{0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserAlreadyExists | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            AuthError::AdminRequired => StatusCode::FORBIDDEN,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserAlreadyExists | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::NotAuthenticated
            | AuthError::AuthenticationRequired => ErrorKind::Unauthorized,
            AuthError::AdminRequired => ErrorKind::Forbidden,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AdminRequired => {
                tracing::warn!("Non-admin attempted an admin operation");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                AuthError::Validation(err.message().to_string())
            }
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::UserAlreadyExists.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::NotAuthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::AdminRequired.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_match_api_contract() {
        assert_eq!(AuthError::UserAlreadyExists.to_string(), "User already exists");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::NotAuthenticated.to_string(), "Not authenticated");
        assert_eq!(
            AuthError::AuthenticationRequired.to_string(),
            "Authentication required"
        );
        assert_eq!(AuthError::AdminRequired.to_string(), "Admin access required");
    }
}
