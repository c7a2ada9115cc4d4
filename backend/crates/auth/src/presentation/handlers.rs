//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthUserResponse, LoginRequest, MessageResponse, RegisterRequest, UserDto,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthUserResponse {
            user: UserDto::from(&output.user),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(AuthUserResponse {
            user: UserDto::from(&output.user),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        use_case.execute(&token).await?;
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Me
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<AuthUserResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name)
        .ok_or(AuthError::NotAuthenticated)?;

    let use_case =
        CurrentUserUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let user = use_case.execute(&token).await?;

    Ok(Json(AuthUserResponse {
        user: UserDto::from(&user),
    }))
}

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}
