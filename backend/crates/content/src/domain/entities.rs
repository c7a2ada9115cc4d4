//! Content Entities
//!
//! Testimonials, products, services, and user purchases. These serialize
//! straight onto the wire in camelCase; none of them carry secrets.

use auth::models::UserId;
use chrono::{DateTime, Utc};
use kernel::id::Id;
use serde::{Deserialize, Serialize};

pub struct TestimonialMarker;
pub type TestimonialId = Id<TestimonialMarker>;

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

pub struct ServiceMarker;
pub type ServiceId = Id<ServiceMarker>;

pub struct PurchaseMarker;
pub type PurchaseId = Id<PurchaseMarker>;

// ============================================================================
// Testimonial
// ============================================================================

/// A customer testimonial
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "id")]
    pub testimonial_id: TestimonialId,
    pub name: String,
    pub title: String,
    pub company: String,
    pub content: String,
    /// Star rating, 1 to 5
    pub rating: i32,
    pub profile_image: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for a testimonial about to be inserted
#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub name: String,
    pub title: String,
    pub company: String,
    pub content: String,
    pub rating: i32,
    pub profile_image: Option<String>,
    pub is_active: bool,
}

impl NewTestimonial {
    pub fn into_testimonial(self, testimonial_id: TestimonialId) -> Testimonial {
        Testimonial {
            testimonial_id,
            name: self.name,
            title: self.title,
            company: self.company,
            content: self.content,
            rating: self.rating,
            profile_image: self.profile_image,
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a testimonial. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub profile_image: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Testimonial {
    pub fn apply(&mut self, patch: TestimonialPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = profile_image;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

// ============================================================================
// Product
// ============================================================================

/// A product in the catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub is_featured: bool,
    pub is_beta: bool,
    pub rating: f64,
    /// Display string such as "1M+"
    pub downloads: String,
    pub app_store_url: Option<String>,
    pub play_store_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for a product about to be inserted
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub is_featured: bool,
    pub is_beta: bool,
    pub rating: f64,
    pub downloads: String,
    pub app_store_url: Option<String>,
    pub play_store_url: Option<String>,
    pub is_active: bool,
}

impl NewProduct {
    pub fn into_product(self, product_id: ProductId) -> Product {
        Product {
            product_id,
            name: self.name,
            description: self.description,
            image: self.image,
            category: self.category,
            is_featured: self.is_featured,
            is_beta: self.is_beta,
            rating: self.rating,
            downloads: self.downloads,
            app_store_url: self.app_store_url,
            play_store_url: self.play_store_url,
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a product
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub category: Option<String>,
    pub is_featured: Option<bool>,
    pub is_beta: Option<bool>,
    pub rating: Option<f64>,
    pub downloads: Option<String>,
    pub app_store_url: Option<Option<String>>,
    pub play_store_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Product {
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(is_featured) = patch.is_featured {
            self.is_featured = is_featured;
        }
        if let Some(is_beta) = patch.is_beta {
            self.is_beta = is_beta;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(downloads) = patch.downloads {
            self.downloads = downloads;
        }
        if let Some(app_store_url) = patch.app_store_url {
            self.app_store_url = app_store_url;
        }
        if let Some(play_store_url) = patch.play_store_url {
            self.play_store_url = play_store_url;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

// ============================================================================
// Service
// ============================================================================

/// A consulting/agency service offering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "id")]
    pub service_id: ServiceId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub features: Vec<String>,
    /// Theme color token used by the frontend
    pub color: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for a service about to be inserted
#[derive(Debug, Clone)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub features: Vec<String>,
    pub color: Option<String>,
    pub is_active: bool,
}

impl NewService {
    pub fn into_service(self, service_id: ServiceId) -> Service {
        Service {
            service_id,
            name: self.name,
            description: self.description,
            image: self.image,
            features: self.features,
            color: self.color,
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a service
#[derive(Debug, Clone, Default)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub color: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Service {
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

// ============================================================================
// User Purchase
// ============================================================================

/// How a purchase was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseType {
    #[serde(rename = "subscription")]
    Subscription,
    #[serde(rename = "one-time")]
    OneTime,
}

/// Lifecycle state of a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Active,
    Expired,
    Cancelled,
}

/// A product purchase belonging to a user. Created by payment flows, read
/// from the user dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPurchase {
    #[serde(rename = "id")]
    pub purchase_id: PurchaseId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub purchase_type: PurchaseType,
    pub status: PurchaseStatus,
    pub expiry_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a purchase about to be inserted
#[derive(Debug, Clone)]
pub struct NewUserPurchase {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub purchase_type: PurchaseType,
    pub status: PurchaseStatus,
    pub expiry_date: Option<DateTime<Utc>>,
}

impl NewUserPurchase {
    pub fn into_purchase(self, purchase_id: PurchaseId) -> UserPurchase {
        UserPurchase {
            purchase_id,
            user_id: self.user_id,
            product_id: self.product_id,
            purchase_type: self.purchase_type,
            status: self.status,
            expiry_date: self.expiry_date,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_serializes_camel_case_with_plain_id() {
        let t = NewTestimonial {
            name: "John Anderson".to_string(),
            title: "CEO".to_string(),
            company: "TechStart Inc.".to_string(),
            content: "Great work".to_string(),
            rating: 5,
            profile_image: None,
            is_active: true,
        }
        .into_testimonial(TestimonialId::new(3));

        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["isActive"], true);
        assert_eq!(json["profileImage"], serde_json::Value::Null);
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let mut t = NewTestimonial {
            name: "A".to_string(),
            title: "B".to_string(),
            company: "C".to_string(),
            content: "D".to_string(),
            rating: 4,
            profile_image: Some("img".to_string()),
            is_active: true,
        }
        .into_testimonial(TestimonialId::new(1));

        t.apply(TestimonialPatch {
            rating: Some(5),
            is_active: Some(false),
            ..Default::default()
        });

        assert_eq!(t.rating, 5);
        assert!(!t.is_active);
        assert_eq!(t.name, "A");
        assert_eq!(t.profile_image.as_deref(), Some("img"));
    }

    #[test]
    fn test_purchase_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&PurchaseType::Subscription).unwrap(),
            "\"subscription\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseType::OneTime).unwrap(),
            "\"one-time\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
