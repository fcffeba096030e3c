//! # Order Creation Service
//!
//! Backs `POST /orders`. The body is decoded into an `OrderRequest` by the
//! JSON extractor, structurally validated, and handed to the `OrderStore`,
//! which writes the order and all of its items in one transaction.
//!
//! The response echoes the stored order, including the keys the store
//! assigned to the order and to each item.

use crate::error::ApiError;
use crate::store::OrderStore;
use actix_web::{web, HttpResponse};
use common::requests::OrderRequest;
use common::responses::OrderResponse;
use log::info;

/// Actix web handler for the `POST /orders` endpoint.
///
/// # Arguments
/// * `store` - The shared `OrderStore`, injected by Actix.
/// * `payload` - The decoded order body (`orderedAt`, `customerName`, `items`).
///
/// # Returns
/// - `201 Created` with `{id, orderedAt, customerName, items}` on success.
/// - `400 Bad Request` if the body fails validation.
/// - `500 Internal Server Error` if the store write fails.
pub async fn process(
    store: web::Data<dyn OrderStore>,
    payload: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = payload.into_inner();
    request.validate().map_err(ApiError::BadRequest)?;

    let order = web::block(move || store.create_order(&request)).await??;
    info!("Created order {} with {} item(s)", order.id, order.items.len());

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}
