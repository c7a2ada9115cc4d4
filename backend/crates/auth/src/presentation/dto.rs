//! Request/Response DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entity::User;

/// POST /api/auth/register request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.as_i64(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            is_admin: user.is_admin,
        }
    }
}

/// Response for register, login, and me
#[derive(Debug, Serialize)]
pub struct AuthUserResponse {
    pub user: UserDto,
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
