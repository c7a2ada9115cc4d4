//! Auth Middleware
//!
//! Guards for protected and admin-only routes. Guards never create or
//! refresh sessions; they only observe them.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::UserId;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Authenticated user id, stored in request extensions by `require_auth`
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Full admin user record, stored in request extensions by `require_admin`
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

/// Middleware that requires a valid session.
///
/// On success the request gains a `CurrentUser` extension; on failure the
/// request is rejected with 401 before reaching the handler.
pub async fn require_auth<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let session = match resolve_session(&state, req.headers()).await {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
    });

    next.run(req).await
}

/// Middleware that requires a valid session belonging to an admin.
///
/// Authentication is checked before authorization: a missing session is 401
/// even if the route is admin-only. On success the request gains both
/// `CurrentUser` and `AdminUser` extensions.
pub async fn require_admin<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let session = match resolve_session(&state, req.headers()).await {
        Ok(session) => session,
        Err(err) => return err.into_response(),
    };

    let user = match UserRepository::find_by_id(state.repo.as_ref(), session.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return AuthError::AuthenticationRequired.into_response(),
        Err(err) => return err.into_response(),
    };

    if !user.is_admin {
        return AuthError::AdminRequired.into_response();
    }

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
    });
    req.extensions_mut().insert(AdminUser(user));

    next.run(req).await
}

// Takes headers rather than the request so the guard futures stay Send;
// a `&Request<Body>` held across an await point is not.
async fn resolve_session<R>(
    state: &AuthGateState<R>,
    headers: &HeaderMap,
) -> Result<crate::domain::entity::Session, AuthError>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(headers, &state.config.session_cookie_name)
        .ok_or(AuthError::AuthenticationRequired)?;

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .get_session(&token)
        .await
        .map_err(|_| AuthError::AuthenticationRequired)
}
