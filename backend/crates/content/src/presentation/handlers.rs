//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::presentation::middleware::CurrentUser;

use crate::application::stats::{AdminStats, AdminStatsUseCase};
use crate::domain::entities::{
    Product, ProductId, Service, ServiceId, Testimonial, TestimonialId, UserPurchase,
};
use crate::domain::repository::ContentRepository;
use crate::error::ContentResult;
use crate::presentation::dto::{
    CreateProductRequest, CreateServiceRequest, CreateTestimonialRequest, UpdateProductRequest,
    UpdateServiceRequest, UpdateTestimonialRequest,
};

/// Shared state for public and user content handlers
#[derive(Clone)]
pub struct ContentAppState<C>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<C>,
}

/// Shared state for admin handlers (stats needs the credential store too)
#[derive(Clone)]
pub struct AdminAppState<C, U>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub content: Arc<C>,
    pub users: Arc<U>,
}

/// Plain message response
#[derive(Debug, serde::Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Public catalog
// ============================================================================

/// GET /api/testimonials
pub async fn list_testimonials<C>(
    State(state): State<ContentAppState<C>>,
) -> ContentResult<Json<Vec<Testimonial>>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(state.repo.list_active_testimonials().await?))
}

/// GET /api/products
pub async fn list_products<C>(
    State(state): State<ContentAppState<C>>,
) -> ContentResult<Json<Vec<Product>>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(state.repo.list_active_products().await?))
}

/// GET /api/products/featured
pub async fn list_featured_products<C>(
    State(state): State<ContentAppState<C>>,
) -> ContentResult<Json<Vec<Product>>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(state.repo.list_featured_products().await?))
}

/// GET /api/products/beta
pub async fn list_beta_products<C>(
    State(state): State<ContentAppState<C>>,
) -> ContentResult<Json<Vec<Product>>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(state.repo.list_beta_products().await?))
}

/// GET /api/services
pub async fn list_services<C>(
    State(state): State<ContentAppState<C>>,
) -> ContentResult<Json<Vec<Service>>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(state.repo.list_active_services().await?))
}

// ============================================================================
// User dashboard
// ============================================================================

/// GET /api/user/purchases
pub async fn my_purchases<C>(
    State(state): State<ContentAppState<C>>,
    Extension(current): Extension<CurrentUser>,
) -> ContentResult<Json<Vec<UserPurchase>>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
{
    Ok(Json(
        state.repo.list_purchases_for_user(current.user_id).await?,
    ))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/stats
pub async fn admin_stats<C, U>(
    State(state): State<AdminAppState<C, U>>,
) -> ContentResult<Json<AdminStats>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AdminStatsUseCase::new(state.users.clone(), state.content.clone());
    Ok(Json(use_case.execute().await?))
}

/// POST /api/admin/testimonials
pub async fn create_testimonial<C, U>(
    State(state): State<AdminAppState<C, U>>,
    Json(req): Json<CreateTestimonialRequest>,
) -> ContentResult<Json<Testimonial>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let testimonial = state.content.create_testimonial(req.into_new()?).await?;
    tracing::info!(id = %testimonial.testimonial_id, "Testimonial created");
    Ok(Json(testimonial))
}

/// PUT /api/admin/testimonials/{id}
pub async fn update_testimonial<C, U>(
    State(state): State<AdminAppState<C, U>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTestimonialRequest>,
) -> ContentResult<Json<Testimonial>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let testimonial = state
        .content
        .update_testimonial(TestimonialId::new(id), req.into_patch()?)
        .await?;
    Ok(Json(testimonial))
}

/// DELETE /api/admin/testimonials/{id}
pub async fn delete_testimonial<C, U>(
    State(state): State<AdminAppState<C, U>>,
    Path(id): Path<i64>,
) -> ContentResult<Json<MessageResponse>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    state
        .content
        .delete_testimonial(TestimonialId::new(id))
        .await?;
    tracing::info!(id, "Testimonial deleted");
    Ok(Json(MessageResponse {
        message: "Testimonial deleted".to_string(),
    }))
}

/// POST /api/admin/products
pub async fn create_product<C, U>(
    State(state): State<AdminAppState<C, U>>,
    Json(req): Json<CreateProductRequest>,
) -> ContentResult<Json<Product>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let product = state.content.create_product(req.into_new()?).await?;
    tracing::info!(id = %product.product_id, "Product created");
    Ok(Json(product))
}

/// PUT /api/admin/products/{id}
pub async fn update_product<C, U>(
    State(state): State<AdminAppState<C, U>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> ContentResult<Json<Product>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let product = state
        .content
        .update_product(ProductId::new(id), req.into_patch()?)
        .await?;
    Ok(Json(product))
}

/// POST /api/admin/services
pub async fn create_service<C, U>(
    State(state): State<AdminAppState<C, U>>,
    Json(req): Json<CreateServiceRequest>,
) -> ContentResult<Json<Service>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let service = state.content.create_service(req.into_new()?).await?;
    tracing::info!(id = %service.service_id, "Service created");
    Ok(Json(service))
}

/// PUT /api/admin/services/{id}
pub async fn update_service<C, U>(
    State(state): State<AdminAppState<C, U>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateServiceRequest>,
) -> ContentResult<Json<Service>>
where
    C: ContentRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let service = state
        .content
        .update_service(ServiceId::new(id), req.into_patch()?)
        .await?;
    Ok(Json(service))
}
