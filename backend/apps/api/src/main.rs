//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::application::config::AuthConfig;
use auth::domain::entity::NewUser;
use auth::domain::repository::{SessionRepository, UserRepository};
use auth::models::{Email, Username};
use auth::presentation::middleware::AuthGateState;
use auth::{AuthError, MemoryAuthRepository};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use content::MemoryContentRepository;
use content::presentation::router::{admin_router, public_router, user_router};
use platform::password::{ClearTextPassword, HashedPassword};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,content=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    // Session configuration
    let config = build_auth_config(&environment)?;

    // In-memory stores
    let auth_repo = MemoryAuthRepository::new();
    let content_repo = Arc::new(MemoryContentRepository::with_seed_data());

    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    match auth_repo.cleanup_expired().await {
        Ok(sessions) => {
            tracing::info!(sessions_deleted = sessions, "Session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session cleanup failed, continuing anyway");
        }
    }

    // Bootstrap admin account from environment
    bootstrap_admin(&auth_repo).await?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let gate = AuthGateState {
        repo: Arc::new(auth_repo.clone()),
        config: Arc::new(config.clone()),
    };

    let content_routes = Router::new()
        .merge(public_router(content_repo.clone()))
        .merge(user_router(content_repo.clone(), gate.clone()))
        .merge(admin_router(
            content_repo,
            Arc::new(auth_repo.clone()),
            gate,
        ));

    let started_at = Instant::now();
    let health_env = environment.clone();
    let health = move || {
        let environment = health_env.clone();
        async move {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "environment": environment,
                "uptime": started_at.elapsed().as_secs(),
            }))
        }
    };

    // Build router
    let app = Router::new()
        .route("/api/health", get(health))
        .nest("/api/auth", auth::auth_router(auth_repo, config))
        .nest("/api", content_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build the session configuration for the current environment.
///
/// Production requires a stable `SESSION_SECRET` so sessions survive
/// horizontal scaling of the cookie-signing key; development generates a
/// fresh secret per process.
fn build_auth_config(environment: &str) -> anyhow::Result<AuthConfig> {
    if environment != "production" {
        return Ok(AuthConfig::development());
    }

    let secret_b64 = env::var("SESSION_SECRET").context("SESSION_SECRET must be set in production")?;
    let secret_bytes =
        platform::crypto::from_base64(&secret_b64).context("SESSION_SECRET must be base64")?;
    let secret: [u8; 32] = secret_bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes"))?;

    Ok(AuthConfig {
        session_secret: secret,
        cookie_secure: true,
        ..AuthConfig::default()
    })
}

/// Create the admin account named by ADMIN_EMAIL / ADMIN_PASSWORD.
///
/// Registration can never produce an admin, so this is the only way an
/// admin comes to exist. Skipped when the variables are absent; an
/// already-existing account is left untouched.
async fn bootstrap_admin(repo: &MemoryAuthRepository) -> anyhow::Result<()> {
    let (Ok(email), Ok(password)) = (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) else {
        tracing::info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin bootstrap");
        return Ok(());
    };

    let username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());

    let email = Email::new(&email).map_err(|e| anyhow::anyhow!("ADMIN_EMAIL invalid: {e}"))?;
    let username =
        Username::new(&username).map_err(|e| anyhow::anyhow!("ADMIN_USERNAME invalid: {e}"))?;
    let password_hash = ClearTextPassword::new(password)
        .map_err(|e| anyhow::anyhow!("ADMIN_PASSWORD invalid: {e}"))?
        .hash()
        .map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;

    create_admin_account(repo, username, email, password_hash).await
}

async fn create_admin_account(
    repo: &MemoryAuthRepository,
    username: Username,
    email: Email,
    password_hash: HashedPassword,
) -> anyhow::Result<()> {
    // Qualified: the repo also implements SessionRepository, which has its
    // own `create`
    let created = UserRepository::create(
        repo,
        NewUser {
            username,
            email,
            password_hash,
            is_admin: true,
        },
    )
    .await;

    match created {
        Ok(user) => {
            tracing::info!(user_id = %user.user_id, "Admin account created");
            Ok(())
        }
        Err(AuthError::UserAlreadyExists) => {
            tracing::info!("Admin account already exists");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("admin bootstrap failed: {e}")),
    }
}
