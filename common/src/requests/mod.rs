use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Request payload for `POST /orders` and `PUT /orders/{id}`.
///
/// Every field is required. Item ids sent by the client are ignored; keys are
/// always assigned by the store.
///
/// `ordered_at` accepts any RFC 3339 offset and is normalised to UTC.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub ordered_at: DateTime<Utc>,
    pub customer_name: String,
    pub items: Vec<ItemRequest>,
}

/// One line item inside an `OrderRequest`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub item_code: String,
    pub description: String,
    pub quantity: i64,
}

impl OrderRequest {
    /// Structural checks that serde cannot express.
    ///
    /// Returns the first problem found as a human readable message.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("customerName must not be empty".to_string());
        }
        if let Some(pos) = self.items.iter().position(|item| item.quantity < 0) {
            return Err(format!("items[{}].quantity must not be negative", pos));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<OrderRequest, serde_json::Error> {
        serde_json::from_str(body)
    }

    #[test]
    fn accepts_a_well_formed_body() {
        let req = parse(
            r#"{"customerName":"Alice","orderedAt":"2024-01-01T00:00:00Z",
                "items":[{"itemCode":"A1","description":"Widget","quantity":2}]}"#,
        )
        .unwrap();

        assert_eq!(req.customer_name, "Alice");
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].quantity, 2);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn ignores_client_supplied_item_ids() {
        let req = parse(
            r#"{"customerName":"Bob","orderedAt":"2024-02-01T10:30:00Z",
                "items":[{"id":99,"itemCode":"B","description":"Bolt","quantity":0}]}"#,
        )
        .unwrap();
        assert_eq!(req.items[0].item_code, "B");
    }

    #[test]
    fn missing_fields_fail_to_decode() {
        assert!(parse(r#"{"customerName":"Alice","items":[]}"#).is_err());
        assert!(parse(r#"{"customerName":"Alice","orderedAt":"2024-01-01T00:00:00Z"}"#).is_err());
    }

    #[test]
    fn rejects_blank_customer_and_negative_quantity() {
        let blank = parse(r#"{"customerName":"  ","orderedAt":"2024-01-01T00:00:00Z","items":[]}"#)
            .unwrap();
        assert!(blank.validate().is_err());

        let negative = parse(
            r#"{"customerName":"Alice","orderedAt":"2024-01-01T00:00:00Z",
                "items":[{"itemCode":"A","description":"a","quantity":1},
                         {"itemCode":"B","description":"b","quantity":-1}]}"#,
        )
        .unwrap();
        assert_eq!(
            negative.validate().unwrap_err(),
            "items[1].quantity must not be negative"
        );
    }
}
