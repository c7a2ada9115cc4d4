//! In-Memory Content Store
//!
//! `BTreeMap` keyed by the sequential id keeps listing in insertion order.
//! Cloning the store shares the underlying maps.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use crate::domain::entities::{
    NewProduct, NewService, NewTestimonial, NewUserPurchase, Product, ProductId, ProductPatch,
    PurchaseId, PurchaseStatus, PurchaseType, Service, ServiceId, ServicePatch, Testimonial,
    TestimonialId, TestimonialPatch, UserPurchase,
};
use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};
use auth::models::UserId;

#[derive(Default)]
struct Inner {
    testimonials: RwLock<BTreeMap<i64, Testimonial>>,
    products: RwLock<BTreeMap<i64, Product>>,
    services: RwLock<BTreeMap<i64, Service>>,
    purchases: RwLock<BTreeMap<i64, UserPurchase>>,
    next_testimonial_id: AtomicI64,
    next_product_id: AtomicI64,
    next_service_id: AtomicI64,
    next_purchase_id: AtomicI64,
}

/// In-memory content store
#[derive(Clone, Default)]
pub struct MemoryContentRepository {
    inner: Arc<Inner>,
}

impl MemoryContentRepository {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the default storefront catalog
    pub fn with_seed_data() -> Self {
        // Maps are built before anything is behind a lock
        let mut testimonials = BTreeMap::new();
        for (i, new) in seed_testimonials().into_iter().enumerate() {
            let id = (i + 1) as i64;
            testimonials.insert(id, new.into_testimonial(TestimonialId::new(id)));
        }

        let mut products = BTreeMap::new();
        for (i, new) in seed_products().into_iter().enumerate() {
            let id = (i + 1) as i64;
            products.insert(id, new.into_product(ProductId::new(id)));
        }

        let mut services = BTreeMap::new();
        for (i, new) in seed_services().into_iter().enumerate() {
            let id = (i + 1) as i64;
            services.insert(id, new.into_service(ServiceId::new(id)));
        }

        Self {
            inner: Arc::new(Inner {
                next_testimonial_id: AtomicI64::new(testimonials.len() as i64),
                next_product_id: AtomicI64::new(products.len() as i64),
                next_service_id: AtomicI64::new(services.len() as i64),
                testimonials: RwLock::new(testimonials),
                products: RwLock::new(products),
                services: RwLock::new(services),
                purchases: RwLock::new(BTreeMap::new()),
                next_purchase_id: AtomicI64::new(0),
            }),
        }
    }

    fn next_id(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl ContentRepository for MemoryContentRepository {
    // ------------------------------------------------------------------
    // Testimonials
    // ------------------------------------------------------------------

    async fn list_testimonials(&self) -> ContentResult<Vec<Testimonial>> {
        let testimonials = self.inner.testimonials.read().await;
        Ok(testimonials.values().cloned().collect())
    }

    async fn list_active_testimonials(&self) -> ContentResult<Vec<Testimonial>> {
        let testimonials = self.inner.testimonials.read().await;
        Ok(testimonials
            .values()
            .filter(|t| t.is_active)
            .cloned()
            .collect())
    }

    async fn create_testimonial(&self, new: NewTestimonial) -> ContentResult<Testimonial> {
        let mut testimonials = self.inner.testimonials.write().await;
        let id = Self::next_id(&self.inner.next_testimonial_id);
        let testimonial = new.into_testimonial(TestimonialId::new(id));
        testimonials.insert(id, testimonial.clone());
        Ok(testimonial)
    }

    async fn update_testimonial(
        &self,
        id: TestimonialId,
        patch: TestimonialPatch,
    ) -> ContentResult<Testimonial> {
        let mut testimonials = self.inner.testimonials.write().await;
        let testimonial = testimonials
            .get_mut(&id.as_i64())
            .ok_or(ContentError::TestimonialNotFound)?;
        testimonial.apply(patch);
        Ok(testimonial.clone())
    }

    async fn delete_testimonial(&self, id: TestimonialId) -> ContentResult<()> {
        let mut testimonials = self.inner.testimonials.write().await;
        testimonials
            .remove(&id.as_i64())
            .ok_or(ContentError::TestimonialNotFound)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    async fn list_products(&self) -> ContentResult<Vec<Product>> {
        let products = self.inner.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn list_active_products(&self) -> ContentResult<Vec<Product>> {
        let products = self.inner.products.read().await;
        Ok(products.values().filter(|p| p.is_active).cloned().collect())
    }

    async fn list_featured_products(&self) -> ContentResult<Vec<Product>> {
        let products = self.inner.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.is_active && p.is_featured)
            .cloned()
            .collect())
    }

    async fn list_beta_products(&self) -> ContentResult<Vec<Product>> {
        let products = self.inner.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.is_active && p.is_beta)
            .cloned()
            .collect())
    }

    async fn create_product(&self, new: NewProduct) -> ContentResult<Product> {
        let mut products = self.inner.products.write().await;
        let id = Self::next_id(&self.inner.next_product_id);
        let product = new.into_product(ProductId::new(id));
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, patch: ProductPatch) -> ContentResult<Product> {
        let mut products = self.inner.products.write().await;
        let product = products
            .get_mut(&id.as_i64())
            .ok_or(ContentError::ProductNotFound)?;
        product.apply(patch);
        Ok(product.clone())
    }

    // ------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------

    async fn list_services(&self) -> ContentResult<Vec<Service>> {
        let services = self.inner.services.read().await;
        Ok(services.values().cloned().collect())
    }

    async fn list_active_services(&self) -> ContentResult<Vec<Service>> {
        let services = self.inner.services.read().await;
        Ok(services.values().filter(|s| s.is_active).cloned().collect())
    }

    async fn create_service(&self, new: NewService) -> ContentResult<Service> {
        let mut services = self.inner.services.write().await;
        let id = Self::next_id(&self.inner.next_service_id);
        let service = new.into_service(ServiceId::new(id));
        services.insert(id, service.clone());
        Ok(service)
    }

    async fn update_service(&self, id: ServiceId, patch: ServicePatch) -> ContentResult<Service> {
        let mut services = self.inner.services.write().await;
        let service = services
            .get_mut(&id.as_i64())
            .ok_or(ContentError::ServiceNotFound)?;
        service.apply(patch);
        Ok(service.clone())
    }

    // ------------------------------------------------------------------
    // Purchases
    // ------------------------------------------------------------------

    async fn list_purchases_for_user(&self, user_id: UserId) -> ContentResult<Vec<UserPurchase>> {
        let purchases = self.inner.purchases.read().await;
        Ok(purchases
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_purchase(&self, new: NewUserPurchase) -> ContentResult<UserPurchase> {
        let mut purchases = self.inner.purchases.write().await;
        let id = Self::next_id(&self.inner.next_purchase_id);
        let purchase = new.into_purchase(PurchaseId::new(id));
        purchases.insert(id, purchase.clone());
        Ok(purchase)
    }

    async fn update_purchase_status(
        &self,
        id: PurchaseId,
        status: PurchaseStatus,
    ) -> ContentResult<UserPurchase> {
        let mut purchases = self.inner.purchases.write().await;
        let purchase = purchases
            .get_mut(&id.as_i64())
            .ok_or(ContentError::PurchaseNotFound)?;
        purchase.status = status;
        Ok(purchase.clone())
    }

    async fn count_active_subscriptions(&self) -> ContentResult<u64> {
        let purchases = self.inner.purchases.read().await;
        Ok(purchases
            .values()
            .filter(|p| {
                p.purchase_type == PurchaseType::Subscription && p.status == PurchaseStatus::Active
            })
            .count() as u64)
    }
}

// ============================================================================
// Seed catalog
// ============================================================================

fn seed_testimonials() -> Vec<NewTestimonial> {
    let entries: [(&str, &str, &str, &str); 6] = [
        (
            "John Anderson",
            "CEO",
            "TechStart Inc.",
            "The AI solutions transformed our business operations completely. The custom AI agents they developed increased our efficiency by 300%.",
        ),
        (
            "Sarah Mitchell",
            "Marketing Director",
            "GrowthCorp",
            "The career coaching service helped me transition from a junior role to a senior position in just 6 months. Incredible results!",
        ),
        (
            "Michael Chen",
            "Founder",
            "InnovateLab",
            "Their brand development service gave our startup the professional identity we needed. We closed our Series A within 3 months.",
        ),
        (
            "Emma Rodriguez",
            "CTO",
            "DataFlow Solutions",
            "The ZyRok app development exceeded our expectations. The user engagement metrics are through the roof!",
        ),
        (
            "David Park",
            "CEO",
            "HealthTech Plus",
            "HealthCare Pro revolutionized how we deliver patient care. The AI diagnostics are incredibly accurate.",
        ),
        (
            "Lisa Thompson",
            "VP Operations",
            "FinanceFirst",
            "FinanceTracker AI helped our clients save over $2M in the first quarter. Outstanding ROI!",
        ),
    ];

    entries
        .into_iter()
        .map(|(name, title, company, content)| NewTestimonial {
            name: name.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            content: content.to_string(),
            rating: 5,
            profile_image: None,
            is_active: true,
        })
        .collect()
}

fn seed_products() -> Vec<NewProduct> {
    let entries: [(&str, &str, &str, bool, bool, f64, &str); 5] = [
        (
            "ZyRok Social",
            "Instagram, TikTok, and YouTube Reels inspired social media platform",
            "Social Media",
            true,
            false,
            4.8,
            "1M+",
        ),
        (
            "HealthCare Pro",
            "AI-powered health monitoring and medical consultation platform",
            "Healthcare",
            false,
            true,
            4.6,
            "500K+",
        ),
        (
            "FinanceTracker AI",
            "Smart financial goal tracking and expense management with AI insights",
            "Finance",
            false,
            true,
            4.7,
            "750K+",
        ),
        (
            "TradeMaster Pro",
            "Advanced stock market analysis and day-trading tools with AI predictions",
            "Trading",
            false,
            true,
            4.5,
            "300K+",
        ),
        (
            "Analytics Pro",
            "Business intelligence and analytics platform with AI-driven insights",
            "Analytics",
            false,
            true,
            4.4,
            "200K+",
        ),
    ];

    entries
        .into_iter()
        .map(
            |(name, description, category, is_featured, is_beta, rating, downloads)| NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                image: None,
                category: category.to_string(),
                is_featured,
                is_beta,
                rating,
                downloads: downloads.to_string(),
                app_store_url: Some("#".to_string()),
                play_store_url: Some("#".to_string()),
                is_active: true,
            },
        )
        .collect()
}

fn seed_services() -> Vec<NewService> {
    let entries: [(&str, &str, [&str; 3], &str); 5] = [
        (
            "AI Applications",
            "Custom mobile and web applications powered by advanced AI algorithms for App Store and Google Play deployment.",
            [
                "Mobile App Development",
                "Web Application Suite",
                "Store Deployment",
            ],
            "primary-400",
        ),
        (
            "Career Coaching",
            "Personalized career guidance and consulting services for students and professionals seeking career advancement.",
            [
                "1-on-1 Coaching Sessions",
                "Resume Optimization",
                "Interview Preparation",
            ],
            "accent-cyan",
        ),
        (
            "AI Agents",
            "Intelligent business automation agents designed to streamline operations and drive growth through AI-powered solutions.",
            ["Custom AI Agents", "Business Automation", "Growth Analytics"],
            "secondary-400",
        ),
        (
            "Brand Development",
            "Comprehensive brand identity creation and development services for companies of all sizes, from startups to enterprises.",
            [
                "Brand Identity Design",
                "Marketing Strategy",
                "Digital Presence",
            ],
            "accent-amber",
        ),
        (
            "Customer-Business Connections",
            "Revolutionary platform connecting customers directly to businesses through AI-powered matching and service optimization.",
            ["Smart Matching", "Direct Connections", "Growth Analytics"],
            "accent-emerald",
        ),
    ];

    entries
        .into_iter()
        .map(|(name, description, features, color)| NewService {
            name: name.to_string(),
            description: description.to_string(),
            image: None,
            features: features.iter().map(|f| f.to_string()).collect(),
            color: Some(color.to_string()),
            is_active: true,
        })
        .collect()
}
