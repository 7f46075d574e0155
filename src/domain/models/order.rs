use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{FieldUpdate, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pendiente", alias = "pending")]
    Pending,
    #[serde(rename = "completado", alias = "completed")]
    Completed,
    #[serde(rename = "cancelado", alias = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pendiente",
            OrderStatus::Completed => "completado",
            OrderStatus::Cancelled => "cancelado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    user_id: String,
    item_description: String,
    quantity: u32,
    total_price: f64,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn place(id: String, created_at: DateTime<Utc>, new_order: NewOrder) -> Self {
        Self {
            id,
            user_id: new_order.user_id,
            item_description: new_order.item_description,
            quantity: new_order.quantity,
            total_price: new_order.total_price,
            status: OrderStatus::Pending,
            created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn item_description(&self) -> &str {
        &self.item_description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Order {
    type Update = OrderUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn merged(&self, update: &OrderUpdate) -> Self {
        Self {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            item_description: update.item_description.resolve(&self.item_description),
            quantity: update.quantity.resolve(&self.quantity),
            total_price: self.total_price,
            status: update.status.resolve(&self.status),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: String,
    pub item_description: String,
    pub quantity: u32,
    pub total_price: f64,
}

impl NewOrder {
    pub fn new(
        user_id: impl Into<String>,
        item_description: impl Into<String>,
        quantity: u32,
        total_price: f64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            item_description: item_description.into(),
            quantity,
            total_price,
        }
    }
}

/// Fields of an order that can change after it is placed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderUpdate {
    pub item_description: FieldUpdate<String>,
    pub quantity: FieldUpdate<u32>,
    pub status: FieldUpdate<OrderStatus>,
}

impl OrderUpdate {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: FieldUpdate::Set(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order::place(
            "o-1".to_string(),
            Utc::now(),
            NewOrder::new("u1", "Burger", 2, 10.0),
        )
    }

    #[test]
    fn test_new_order_is_pending() {
        let json = serde_json::to_value(order()).unwrap();
        assert_eq!(json["status"], "pendiente");
        assert_eq!(json["item_description"], "Burger");
    }

    #[test]
    fn test_status_accepts_english_alias() {
        let update: OrderUpdate = serde_json::from_str(r#"{"status": "completed"}"#).unwrap();
        assert_eq!(update.status, FieldUpdate::Set(OrderStatus::Completed));

        let update: OrderUpdate = serde_json::from_str(r#"{"status": "completado"}"#).unwrap();
        assert_eq!(update.status, FieldUpdate::Set(OrderStatus::Completed));
    }

    #[test]
    fn test_merge_keeps_description() {
        let original = order();
        let updated = original.merged(&OrderUpdate::status(OrderStatus::Completed));

        assert_eq!(updated.status(), OrderStatus::Completed);
        assert_eq!(updated.item_description(), "Burger");
        assert_eq!(updated.quantity(), 2);
        assert_eq!(updated.user_id(), "u1");
    }
}
