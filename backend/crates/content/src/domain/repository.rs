//! Content Repository Trait
//!
//! One store covers the whole catalog. Listing order is insertion order;
//! `list_*` returns owned snapshots.

use crate::domain::entities::{
    NewProduct, NewService, NewTestimonial, NewUserPurchase, Product, ProductId, ProductPatch,
    PurchaseId, PurchaseStatus, Service, ServiceId, ServicePatch, Testimonial, TestimonialId,
    TestimonialPatch, UserPurchase,
};
use crate::error::ContentResult;
use auth::models::UserId;

/// Content store trait
#[trait_variant::make(ContentRepository: Send)]
pub trait LocalContentRepository {
    // Testimonials
    async fn list_testimonials(&self) -> ContentResult<Vec<Testimonial>>;
    async fn list_active_testimonials(&self) -> ContentResult<Vec<Testimonial>>;
    async fn create_testimonial(&self, new: NewTestimonial) -> ContentResult<Testimonial>;
    /// Fails with `TestimonialNotFound` for an unknown id
    async fn update_testimonial(
        &self,
        id: TestimonialId,
        patch: TestimonialPatch,
    ) -> ContentResult<Testimonial>;
    /// Hard delete. Fails with `TestimonialNotFound` for an unknown id.
    async fn delete_testimonial(&self, id: TestimonialId) -> ContentResult<()>;

    // Products
    async fn list_products(&self) -> ContentResult<Vec<Product>>;
    async fn list_active_products(&self) -> ContentResult<Vec<Product>>;
    /// Active products flagged as featured
    async fn list_featured_products(&self) -> ContentResult<Vec<Product>>;
    /// Active products flagged as beta
    async fn list_beta_products(&self) -> ContentResult<Vec<Product>>;
    async fn create_product(&self, new: NewProduct) -> ContentResult<Product>;
    async fn update_product(&self, id: ProductId, patch: ProductPatch) -> ContentResult<Product>;

    // Services
    async fn list_services(&self) -> ContentResult<Vec<Service>>;
    async fn list_active_services(&self) -> ContentResult<Vec<Service>>;
    async fn create_service(&self, new: NewService) -> ContentResult<Service>;
    async fn update_service(&self, id: ServiceId, patch: ServicePatch) -> ContentResult<Service>;

    // Purchases
    async fn list_purchases_for_user(&self, user_id: UserId) -> ContentResult<Vec<UserPurchase>>;
    async fn create_purchase(&self, new: NewUserPurchase) -> ContentResult<UserPurchase>;
    async fn update_purchase_status(
        &self,
        id: PurchaseId,
        status: PurchaseStatus,
    ) -> ContentResult<UserPurchase>;
    /// Number of purchases currently in `Active` status with type
    /// `Subscription` (admin stats)
    async fn count_active_subscriptions(&self) -> ContentResult<u64>;
}
