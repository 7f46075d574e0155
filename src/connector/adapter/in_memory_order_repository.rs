use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{Clock, IdGenerator, OrderRepository};
use crate::domain::{DomainError, NewOrder, Order, OrderUpdate};

use super::InMemoryStore;

pub struct InMemoryOrderRepository {
    store: InMemoryStore<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }

    pub fn with_sources(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: InMemoryStore::with_sources(ids, clock),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: NewOrder) -> Result<Order, DomainError> {
        let saved = self
            .store
            .insert_with(|id, created_at| Order::place(id, created_at, order))
            .await;
        debug!("Saved order {} to memory", saved.id());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError> {
        Ok(self.store.get(id).await)
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.all().await)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.filter(|order| order.user_id() == user_id).await)
    }

    async fn update(&self, id: &str, update: &OrderUpdate) -> Result<Option<Order>, DomainError> {
        Ok(self.store.update(id, update).await)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.store.remove(id).await)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.store.count().await as u64)
    }
}
