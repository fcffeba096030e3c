use crate::model::item::Item;
use crate::model::order::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body returned by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub ordered_at: DateTime<Utc>,
    pub customer_name: String,
    pub items: Vec<Item>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            ordered_at: order.ordered_at,
            customer_name: order.customer_name,
            items: order.items,
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
