//! Request DTOs
//!
//! Admin write payloads. Entities serialize directly on the way out, so
//! only the inbound shapes live here. Each `into_*` validates before the
//! store is touched.

use serde::Deserialize;

use crate::domain::entities::{
    NewProduct, NewService, NewTestimonial, ProductPatch, ServicePatch, TestimonialPatch,
};
use crate::error::{ContentError, ContentResult};

fn require(value: &str, field: &str) -> ContentResult<()> {
    if value.trim().is_empty() {
        return Err(ContentError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn check_star_rating(rating: i32) -> ContentResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ContentError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

fn check_product_rating(rating: f64) -> ContentResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ContentError::Validation(
            "Rating must be between 0 and 5".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Testimonials
// ============================================================================

/// POST /api/admin/testimonials request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub name: String,
    pub title: String,
    pub company: String,
    pub content: String,
    pub rating: i32,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateTestimonialRequest {
    pub fn into_new(self) -> ContentResult<NewTestimonial> {
        require(&self.name, "Name")?;
        require(&self.content, "Content")?;
        check_star_rating(self.rating)?;

        Ok(NewTestimonial {
            name: self.name,
            title: self.title,
            company: self.company,
            content: self.content,
            rating: self.rating,
            profile_image: self.profile_image,
            is_active: self.is_active,
        })
    }
}

/// PUT /api/admin/testimonials/{id} request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i32>,
    pub profile_image: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateTestimonialRequest {
    pub fn into_patch(self) -> ContentResult<TestimonialPatch> {
        if let Some(rating) = self.rating {
            check_star_rating(rating)?;
        }
        if let Some(name) = &self.name {
            require(name, "Name")?;
        }

        Ok(TestimonialPatch {
            name: self.name,
            title: self.title,
            company: self.company,
            content: self.content,
            rating: self.rating,
            profile_image: self.profile_image.map(Some),
            is_active: self.is_active,
        })
    }
}

// ============================================================================
// Products
// ============================================================================

/// POST /api/admin/products request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub category: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_beta: bool,
    pub rating: f64,
    pub downloads: String,
    #[serde(default)]
    pub app_store_url: Option<String>,
    #[serde(default)]
    pub play_store_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateProductRequest {
    pub fn into_new(self) -> ContentResult<NewProduct> {
        require(&self.name, "Name")?;
        require(&self.description, "Description")?;
        check_product_rating(self.rating)?;

        Ok(NewProduct {
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
        })
    }
}

/// PUT /api/admin/products/{id} request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub is_featured: Option<bool>,
    pub is_beta: Option<bool>,
    pub rating: Option<f64>,
    pub downloads: Option<String>,
    pub app_store_url: Option<String>,
    pub play_store_url: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> ContentResult<ProductPatch> {
        if let Some(rating) = self.rating {
            check_product_rating(rating)?;
        }
        if let Some(name) = &self.name {
            require(name, "Name")?;
        }

        Ok(ProductPatch {
            name: self.name,
            description: self.description,
            image: self.image.map(Some),
            category: self.category,
            is_featured: self.is_featured,
            is_beta: self.is_beta,
            rating: self.rating,
            downloads: self.downloads,
            app_store_url: self.app_store_url.map(Some),
            play_store_url: self.play_store_url.map(Some),
            is_active: self.is_active,
        })
    }
}

// ============================================================================
// Services
// ============================================================================

/// POST /api/admin/services request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl CreateServiceRequest {
    pub fn into_new(self) -> ContentResult<NewService> {
        require(&self.name, "Name")?;
        require(&self.description, "Description")?;

        Ok(NewService {
            name: self.name,
            description: self.description,
            image: self.image,
            features: self.features,
            color: self.color,
            is_active: self.is_active,
        })
    }
}

/// PUT /api/admin/services/{id} request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub features: Option<Vec<String>>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateServiceRequest {
    pub fn into_patch(self) -> ContentResult<ServicePatch> {
        if let Some(name) = &self.name {
            require(name, "Name")?;
        }

        Ok(ServicePatch {
            name: self.name,
            description: self.description,
            image: self.image.map(Some),
            features: self.features,
            color: self.color.map(Some),
            is_active: self.is_active,
        })
    }
}

fn default_true() -> bool {
    true
}
