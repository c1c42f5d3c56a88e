//! Promotion Repository

use super::{PromotionStore, RepoError, RepoResult, fresh_id};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{NewPromotion, Promotion, PromotionChanges};
use shared::util::now_millis;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct InMemoryPromotionStore {
    promotions: Arc<RwLock<HashMap<i64, Promotion>>>,
}

impl InMemoryPromotionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut list: Vec<Promotion>) -> Vec<Promotion> {
        list.sort_by_key(|p| (p.created_at, p.id));
        list
    }
}

#[async_trait]
impl PromotionStore for InMemoryPromotionStore {
    async fn create(&self, data: NewPromotion) -> RepoResult<Promotion> {
        let mut promotions = self.promotions.write();
        let id = fresh_id(|id| promotions.contains_key(&id));
        let promotion = Promotion::new(id, data, now_millis());
        promotions.insert(id, promotion.clone());
        Ok(promotion)
    }

    async fn find_all(&self) -> RepoResult<Vec<Promotion>> {
        let all = self.promotions.read().values().cloned().collect();
        Ok(Self::sorted(all))
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Promotion>> {
        Ok(self.promotions.read().get(&id).cloned())
    }

    async fn find_by_product_id(&self, product_id: i64) -> RepoResult<Vec<Promotion>> {
        let matching = self
            .promotions
            .read()
            .values()
            .filter(|p| p.product_id == product_id)
            .cloned()
            .collect();
        Ok(Self::sorted(matching))
    }

    async fn update(&self, id: i64, changes: PromotionChanges) -> RepoResult<Promotion> {
        let mut promotions = self.promotions.write();
        let promotion = promotions
            .get_mut(&id)
            .ok_or_else(|| RepoError::NotFound(format!("Promotion {}", id)))?;
        promotion.apply(changes, now_millis());
        Ok(promotion.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.promotions.write().remove(&id).is_some())
    }

    async fn delete_by_product_id(&self, product_id: i64) -> RepoResult<usize> {
        let mut promotions = self.promotions.write();
        let before = promotions.len();
        promotions.retain(|_, p| p.product_id != product_id);
        Ok(before - promotions.len())
    }
}
