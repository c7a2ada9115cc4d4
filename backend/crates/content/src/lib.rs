//! Content (Storefront Catalog) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and the repository trait
//! - `application/` - Use cases
//! - `infra/` - Repository implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Testimonials, products, and services with active/inactive visibility
//! - Featured and beta product views
//! - Per-user purchase records for the dashboard
//! - Admin-only content management and computed dashboard stats

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{AdminStats, AdminStatsUseCase};
pub use domain::entities::{Product, Service, Testimonial, UserPurchase};
pub use error::{ContentError, ContentResult};
pub use infra::memory::MemoryContentRepository;
pub use presentation::router::{admin_router, public_router, user_router};
