use serde::{Deserialize, Serialize};

/// A line item as stored and returned by the API.
///
/// The owning order's key lives only in the `items.order_id` column and is
/// never part of this wire type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub item_code: String,
    pub description: String,
    pub quantity: i64,
}
