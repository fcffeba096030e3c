use crate::model::item::Item;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The full order object returned by `GET /orders` and `GET /orders/{id}`.
///
/// `items` is always present, serialized as `[]` when the order has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub ordered_at: DateTime<Utc>,
    pub items: Vec<Item>,
}
