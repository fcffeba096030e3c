//! # Order Update Service
//!
//! Backs `PUT /orders/{id}`. The order's customer name and timestamp are
//! overwritten and its item list is replaced wholesale; the previous item rows
//! are deleted in the same transaction.

use super::parse_id;
use crate::error::ApiError;
use crate::store::OrderStore;
use actix_web::{web, HttpResponse};
use common::requests::OrderRequest;
use common::responses::OrderResponse;
use log::info;

/// Actix web handler for the `PUT /orders/{id}` endpoint.
///
/// The body is decoded by the extractor before this runs, so a malformed body
/// is a 400 even when the order does not exist.
///
/// # Arguments
/// * `store` - The shared `OrderStore`.
/// * `id` - The order key, extracted from the URL path.
/// * `payload` - The replacement order body.
///
/// # Returns
/// - `200 OK` with `{id, orderedAt, customerName, items}`.
/// - `400 Bad Request` if the body fails validation.
/// - `404 Not Found` if the order does not exist.
pub async fn process(
    store: web::Data<dyn OrderStore>,
    id: web::Path<String>,
    payload: web::Json<OrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let request = payload.into_inner();
    request.validate().map_err(ApiError::BadRequest)?;

    let order = web::block(move || store.update_order(id, &request)).await??;
    info!("Updated order {} ({} item(s))", order.id, order.items.len());

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
