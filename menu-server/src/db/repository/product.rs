//! Product Repository

use super::{ProductStore, RepoError, RepoResult, fresh_id};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::util::now_millis;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<i64, Product>>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate(name: &str) -> RepoError {
    RepoError::Duplicate(format!("Product '{}' already exists", name))
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        // Name check and insert under one lock
        let mut products = self.products.write();
        if products.values().any(|p| p.name == data.name) {
            return Err(duplicate(&data.name));
        }

        let id = fresh_id(|id| products.contains_key(&id));
        let product = Product::new(id, data, now_millis());
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let mut all: Vec<Product> = self.products.read().values().cloned().collect();
        all.sort_by_key(|p| (p.created_at, p.id));
        Ok(all)
    }

    async fn find_visible(&self) -> RepoResult<Vec<Product>> {
        let mut visible: Vec<Product> = self
            .products
            .read()
            .values()
            .filter(|p| p.visible)
            .cloned()
            .collect();
        visible.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then_with(|| a.name.cmp(&b.name))
                .then(a.id.cmp(&b.id))
        });
        Ok(visible)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        Ok(self.products.read().get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn update(&self, id: i64, data: ProductUpdate) -> RepoResult<Product> {
        let mut products = self.products.write();
        if let Some(name) = data.name.as_deref()
            && products.values().any(|p| p.id != id && p.name == name)
        {
            return Err(duplicate(name));
        }

        let product = products
            .get_mut(&id)
            .ok_or_else(|| RepoError::NotFound(format!("Product {}", id)))?;
        product.apply(data, now_millis());
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self.products.write().remove(&id).is_some())
    }
}
