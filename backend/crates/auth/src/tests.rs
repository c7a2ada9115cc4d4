//! Unit and end-to-end tests for the auth crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::{
        CheckSessionUseCase, CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase,
        RegisterInput, RegisterUseCase, token,
    };
    use crate::application::config::AuthConfig;
    use crate::domain::entity::Session;
    use crate::domain::repository::{SessionRepository, UserRepository};
    use crate::error::AuthError;
    use crate::infra::memory::MemoryAuthRepository;

    fn setup() -> (Arc<MemoryAuthRepository>, Arc<AuthConfig>) {
        (
            Arc::new(MemoryAuthRepository::new()),
            Arc::new(AuthConfig::development()),
        )
    }

    fn register_input(username: &str, email: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            email: email.to_string(),
            password: "pw123456".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_creates_user_and_session() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());

        let output = use_case
            .execute(register_input("alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(output.user.user_id.as_i64(), 1);
        assert_eq!(output.user.username.as_str(), "alice");
        assert!(!output.user.is_admin);

        // The returned token resolves to a live session for the new user
        let check = CheckSessionUseCase::new(repo.clone(), config.clone());
        let session = check.get_session(&output.session_token).await.unwrap();
        assert_eq!(session.user_id, output.user.user_id);
    }

    #[tokio::test]
    async fn test_register_assigns_sequential_ids() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());

        let a = use_case
            .execute(register_input("alice", "alice@example.com"))
            .await
            .unwrap();
        let b = use_case
            .execute(register_input("bob", "bob@example.com"))
            .await
            .unwrap();

        assert_eq!(a.user.user_id.as_i64(), 1);
        assert_eq!(b.user.user_id.as_i64(), 2);
    }

    #[tokio::test]
    async fn test_register_duplicate_username_rejected() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());

        use_case
            .execute(register_input("alice", "alice@example.com"))
            .await
            .unwrap();

        let err = use_case
            .execute(register_input("alice", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));

        let err = use_case
            .execute(register_input("alice2", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());

        let err = use_case
            .execute(RegisterInput {
                username: "al".to_string(),
                email: "alice@example.com".to_string(),
                password: "pw123456".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        let err = use_case
            .execute(RegisterInput {
                username: "alice".to_string(),
                email: "not-an-email".to_string(),
                password: "pw123456".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        let err = use_case
            .execute(RegisterInput {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "short".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));

        // Nothing was persisted
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_login_succeeds_with_correct_credentials() {
        let (repo, config) = setup();
        let register = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());
        register
            .execute(register_input("alice", "alice@example.com"))
            .await
            .unwrap();

        let login = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());
        let output = login
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "pw123456".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user.username.as_str(), "alice");

        let check = CheckSessionUseCase::new(repo.clone(), config.clone());
        assert!(check.is_valid(&output.session_token).await);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (repo, config) = setup();
        let register = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());
        register
            .execute(register_input("alice", "alice@example.com"))
            .await
            .unwrap();

        let login = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());

        // Unknown email
        let unknown = login
            .execute(LoginInput {
                email: "ghost@example.com".to_string(),
                password: "pw123456".to_string(),
            })
            .await
            .unwrap_err();

        // Wrong password
        let wrong_pw = login
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        // Malformed email
        let malformed = login
            .execute(LoginInput {
                email: "not-an-email".to_string(),
                password: "pw123456".to_string(),
            })
            .await
            .unwrap_err();

        for err in [unknown, wrong_pw, malformed] {
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert_eq!(err.to_string(), "Invalid credentials");
        }
    }

    #[tokio::test]
    async fn test_logout_destroys_session() {
        let (repo, config) = setup();
        let register = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());
        let output = register
            .execute(register_input("alice", "alice@example.com"))
            .await
            .unwrap();

        let logout = LogoutUseCase::new(repo.clone(), config.clone());
        logout.execute(&output.session_token).await.unwrap();

        let check = CheckSessionUseCase::new(repo.clone(), config.clone());
        assert!(!check.is_valid(&output.session_token).await);

        // Logging out again is still success
        logout.execute(&output.session_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_logout_ignores_garbage_tokens() {
        let (repo, config) = setup();
        let logout = LogoutUseCase::new(repo.clone(), config.clone());

        logout.execute("garbage").await.unwrap();
        logout.execute("").await.unwrap();
        logout.execute("a.b.c").await.unwrap();
    }

    #[tokio::test]
    async fn test_expired_session_fails_closed_and_is_reaped() {
        let (repo, config) = setup();
        let register = RegisterUseCase::new(repo.clone(), repo.clone(), config.clone());
        let output = register
            .execute(register_input("alice", "alice@example.com"))
            .await
            .unwrap();

        // Plant an already expired session
        let expired = Session::new(output.user.user_id, chrono::Duration::seconds(-1));
        SessionRepository::create(repo.as_ref(), &expired)
            .await
            .unwrap();
        let expired_token = token::issue(expired.session_id, &config.session_secret);

        let check = CheckSessionUseCase::new(repo.clone(), config.clone());
        let err = check.get_session(&expired_token).await.unwrap_err();
        assert!(matches!(err, AuthError::NotAuthenticated));

        // The record was deleted on access
        assert!(
            SessionRepository::find_by_id(repo.as_ref(), expired.session_id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_current_user_reports_orphaned_session() {
        let (repo, config) = setup();

        // Session for a user id that was never created
        let session = Session::new(crate::domain::value_object::UserId::new(999), chrono::Duration::hours(1));
        SessionRepository::create(repo.as_ref(), &session)
            .await
            .unwrap();
        let session_token = token::issue(session.session_id, &config.session_secret);

        let use_case = CurrentUserUseCase::new(repo.clone(), repo.clone(), config.clone());
        let err = use_case.execute(&session_token).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }

    #[tokio::test]
    async fn test_cleanup_expired_drops_only_expired() {
        let (repo, _config) = setup();

        let live = Session::new(crate::domain::value_object::UserId::new(1), chrono::Duration::hours(1));
        let dead = Session::new(crate::domain::value_object::UserId::new(1), chrono::Duration::seconds(-1));
        SessionRepository::create(repo.as_ref(), &live).await.unwrap();
        SessionRepository::create(repo.as_ref(), &dead).await.unwrap();

        let dropped = repo.cleanup_expired().await.unwrap();
        assert_eq!(dropped, 1);
        assert!(
            SessionRepository::find_by_id(repo.as_ref(), live.session_id)
                .await
                .unwrap()
                .is_some()
        );
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::MemoryAuthRepository;
    use crate::presentation::router::auth_router;

    fn app() -> (Router, MemoryAuthRepository) {
        let repo = MemoryAuthRepository::new();
        let router = auth_router(repo.clone(), AuthConfig::development());
        (router, repo)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Pull the session cookie pair out of a Set-Cookie header
    fn session_cookie(response: &axum::response::Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("Set-Cookie header")
            .to_str()
            .unwrap();
        assert!(set_cookie.contains("HttpOnly"));
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_then_me_roundtrip() {
        let (router, _repo) = app();

        let response = router
            .clone()
            .oneshot(post_json(
                "/register",
                json!({
                    "username": "newuser",
                    "email": "new@example.com",
                    "password": "pw123456"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = session_cookie(&response);

        let body = body_json(response).await;
        assert_eq!(body["user"]["username"], "newuser");
        assert_eq!(body["user"]["email"], "new@example.com");
        assert_eq!(body["user"]["isAdmin"], false);
        assert!(body["user"].get("passwordHash").is_none());

        // Same cookie identifies the user on /me
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/me")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["user"]["username"], "newuser");
    }

    #[tokio::test]
    async fn test_register_duplicate_is_bad_request() {
        let (router, _repo) = app();

        let payload = json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "pw123456"
        });

        let response = router
            .clone()
            .oneshot(post_json("/register", payload.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(post_json("/register", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User already exists");
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_unauthorized() {
        let (router, _repo) = app();

        let response = router
            .oneshot(post_json(
                "/login",
                json!({
                    "email": "ghost@example.com",
                    "password": "whatever123"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_wrong_password_matches_unknown_email() {
        let (router, _repo) = app();

        router
            .clone()
            .oneshot(post_json(
                "/register",
                json!({
                    "username": "alice",
                    "email": "alice@example.com",
                    "password": "pw123456"
                }),
            ))
            .await
            .unwrap();

        let response = router
            .oneshot(post_json(
                "/login",
                json!({
                    "email": "alice@example.com",
                    "password": "wrong-password"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_me_without_cookie_is_unauthorized() {
        let (router, _repo) = app();

        let response = router
            .oneshot(Request::builder().uri("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Not authenticated");
    }

    #[tokio::test]
    async fn test_logout_invalidates_cookie() {
        let (router, _repo) = app();

        let response = router
            .clone()
            .oneshot(post_json(
                "/register",
                json!({
                    "username": "alice",
                    "email": "alice@example.com",
                    "password": "pw123456"
                }),
            ))
            .await
            .unwrap();
        let cookie = session_cookie(&response);

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let clear = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(clear.contains("Max-Age=0"));
        let body = body_json(response).await;
        assert_eq!(body["message"], "Logged out successfully");

        // The old cookie no longer authenticates
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/me")
                    .header(header::COOKIE, &cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_without_cookie_still_succeeds() {
        let (router, _repo) = app();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_forged_cookie_is_rejected() {
        let (router, _repo) = app();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/me")
                    .header(
                        header::COOKIE,
                        "trtr_session=00000000-0000-4000-8000-000000000000.Zm9yZ2Vk",
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
