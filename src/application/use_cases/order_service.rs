use std::sync::Arc;

use tracing::{info, warn};

use crate::application::OrderRepository;
use crate::domain::{DomainError, NewOrder, Order, OrderUpdate};

use super::validation::{require_text, require_text_if_set};

const USER_REQUIRED: &str = "user_id es requerido";
const DESCRIPTION_REQUIRED: &str = "item_description es requerido";
const QUANTITY_POSITIVE: &str = "quantity debe ser mayor que cero";
const PRICE_NON_NEGATIVE: &str = "total_price debe ser un número no negativo";

/// Use cases for food orders. New orders always start as pending.
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, new_order: NewOrder) -> Result<Order, DomainError> {
        if let Err(e) = validate_new_order(&new_order) {
            warn!("Rejected order: {}", e);
            return Err(e);
        }

        let order = self.repository.save(new_order).await?;
        info!(
            "Placed order {} for user {} ({} x {})",
            order.id(),
            order.user_id(),
            order.quantity(),
            order.item_description()
        );
        Ok(order)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Order>, DomainError> {
        self.repository.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<Order>, DomainError> {
        self.repository.find_all().await
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        self.repository.find_by_user(user_id).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &OrderUpdate,
    ) -> Result<Option<Order>, DomainError> {
        require_text_if_set(&update.item_description, DESCRIPTION_REQUIRED)?;
        if update.quantity.as_set() == Some(&0) {
            return Err(DomainError::invalid_input(QUANTITY_POSITIVE));
        }

        let updated = self.repository.update(id, update).await?;
        if let Some(ref order) = updated {
            info!("Updated order {} (status {})", order.id(), order.status().as_str());
        }
        Ok(updated)
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.repository.count().await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!("Deleted order {}", id);
        }
        Ok(deleted)
    }
}

fn validate_new_order(order: &NewOrder) -> Result<(), DomainError> {
    require_text(&order.user_id, USER_REQUIRED)?;
    require_text(&order.item_description, DESCRIPTION_REQUIRED)?;
    if order.quantity == 0 {
        return Err(DomainError::invalid_input(QUANTITY_POSITIVE));
    }
    if !order.total_price.is_finite() || order.total_price < 0.0 {
        return Err(DomainError::invalid_input(PRICE_NON_NEGATIVE));
    }
    Ok(())
}
