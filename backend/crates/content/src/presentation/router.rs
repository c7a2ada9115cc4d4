//! Content Routers
//!
//! Three surfaces: public catalog, session-gated user dashboard, and
//! admin-gated content management. Guard layers come from the auth crate.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::domain::repository::{SessionRepository, UserRepository};
use auth::presentation::middleware::{AuthGateState, require_admin, require_auth};

use crate::domain::repository::ContentRepository;
use crate::presentation::handlers::{self, AdminAppState, ContentAppState};

/// Public catalog routes; no session required
pub fn public_router<C>(repo: Arc<C>) -> Router
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState { repo };

    Router::new()
        .route("/testimonials", get(handlers::list_testimonials::<C>))
        .route("/products", get(handlers::list_products::<C>))
        .route(
            "/products/featured",
            get(handlers::list_featured_products::<C>),
        )
        .route("/products/beta", get(handlers::list_beta_products::<C>))
        .route("/services", get(handlers::list_services::<C>))
        .with_state(state)
}

/// User dashboard routes; requires a valid session
pub fn user_router<C, A>(repo: Arc<C>, gate: AuthGateState<A>) -> Router
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = ContentAppState { repo };

    Router::new()
        .route("/user/purchases", get(handlers::my_purchases::<C>))
        .layer(middleware::from_fn_with_state(gate, require_auth::<A>))
        .with_state(state)
}

/// Admin content management routes; requires an admin session
pub fn admin_router<C, A>(content: Arc<C>, users: Arc<A>, gate: AuthGateState<A>) -> Router
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = AdminAppState { content, users };

    Router::new()
        .route("/admin/stats", get(handlers::admin_stats::<C, A>))
        .route(
            "/admin/testimonials",
            post(handlers::create_testimonial::<C, A>),
        )
        .route(
            "/admin/testimonials/{id}",
            put(handlers::update_testimonial::<C, A>)
                .delete(handlers::delete_testimonial::<C, A>),
        )
        .route("/admin/products", post(handlers::create_product::<C, A>))
        .route(
            "/admin/products/{id}",
            put(handlers::update_product::<C, A>),
        )
        .route("/admin/services", post(handlers::create_service::<C, A>))
        .route(
            "/admin/services/{id}",
            put(handlers::update_service::<C, A>),
        )
        .layer(middleware::from_fn_with_state(gate, require_admin::<A>))
        .with_state(state)
}
