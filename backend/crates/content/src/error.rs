//! Content Error Types

use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Content-specific errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Testimonial not found")]
    TestimonialNotFound,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Service not found")]
    ServiceNotFound,

    #[error("Purchase not found")]
    PurchaseNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

impl ContentError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ContentError::TestimonialNotFound
            | ContentError::ProductNotFound
            | ContentError::ServiceNotFound
            | ContentError::PurchaseNotFound => 404,
            ContentError::Validation(_) => 400,
            ContentError::Internal(_) => 500,
        }
    }

    /// Error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::TestimonialNotFound
            | ContentError::ProductNotFound
            | ContentError::ServiceNotFound
            | ContentError::PurchaseNotFound => ErrorKind::NotFound,
            ContentError::Validation(_) => ErrorKind::BadRequest,
            ContentError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to kernel AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log at a severity matching the error
    fn log(&self) {
        match self {
            ContentError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal content error");
            }
            other => {
                tracing::debug!(error = %other, "Content error");
            }
        }
    }
}

impl From<AppError> for ContentError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                ContentError::Validation(err.message().to_string())
            }
            _ => ContentError::Internal(err.message().to_string()),
        }
    }
}

impl axum::response::IntoResponse for ContentError {
    fn into_response(self) -> axum::response::Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ContentError::TestimonialNotFound.status_code(), 404);
        assert_eq!(ContentError::ProductNotFound.status_code(), 404);
        assert_eq!(ContentError::ServiceNotFound.status_code(), 404);
        assert_eq!(ContentError::Validation("bad".to_string()).status_code(), 400);
        assert_eq!(ContentError::Internal("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ContentError::TestimonialNotFound.to_string(),
            "Testimonial not found"
        );
        assert_eq!(
            ContentError::Validation("Rating must be between 1 and 5".to_string()).to_string(),
            "Rating must be between 1 and 5"
        );
    }
}
