//! Domain Layer
//!
//! Entities and the repository trait.

pub mod entities;
pub mod repository;

pub use entities::{
    NewProduct, NewService, NewTestimonial, NewUserPurchase, Product, ProductId, ProductPatch,
    PurchaseId, PurchaseStatus, PurchaseType, Service, ServiceId, ServicePatch, Testimonial,
    TestimonialId, TestimonialPatch, UserPurchase,
};
pub use repository::ContentRepository;
