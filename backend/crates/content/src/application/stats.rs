//! Admin Stats Use Case
//!
//! Aggregates computed from live stores. Nothing here is hard-coded; an
//! empty deployment reports zeros.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use serde::Serialize;

use crate::domain::repository::ContentRepository;
use crate::error::{ContentError, ContentResult};

/// Computed dashboard aggregates
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub active_subscriptions: u64,
    pub total_testimonials: u64,
    pub active_testimonials: u64,
    pub total_products: u64,
    pub active_products: u64,
    pub total_services: u64,
    pub active_services: u64,
}

/// Admin stats use case
pub struct AdminStatsUseCase<U, C>
where
    U: UserRepository,
    C: ContentRepository,
{
    user_repo: Arc<U>,
    content_repo: Arc<C>,
}

impl<U, C> AdminStatsUseCase<U, C>
where
    U: UserRepository,
    C: ContentRepository,
{
    pub fn new(user_repo: Arc<U>, content_repo: Arc<C>) -> Self {
        Self {
            user_repo,
            content_repo,
        }
    }

    pub async fn execute(&self) -> ContentResult<AdminStats> {
        let total_users = self
            .user_repo
            .count()
            .await
            .map_err(|e| ContentError::Internal(e.to_string()))?;
        let active_subscriptions = self.content_repo.count_active_subscriptions().await?;

        let testimonials = self.content_repo.list_testimonials().await?;
        let products = self.content_repo.list_products().await?;
        let services = self.content_repo.list_services().await?;

        Ok(AdminStats {
            total_users,
            active_subscriptions,
            total_testimonials: testimonials.len() as u64,
            active_testimonials: testimonials.iter().filter(|t| t.is_active).count() as u64,
            total_products: products.len() as u64,
            active_products: products.iter().filter(|p| p.is_active).count() as u64,
            total_services: services.len() as u64,
            active_services: services.iter().filter(|s| s.is_active).count() as u64,
        })
    }
}
