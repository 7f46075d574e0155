use async_trait::async_trait;

use crate::domain::{DomainError, NewOrder, Order, OrderUpdate};

/// Persistence for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: NewOrder) -> Result<Order, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError>;

    async fn update(&self, id: &str, update: &OrderUpdate) -> Result<Option<Order>, DomainError>;

    async fn delete(&self, id: &str) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
