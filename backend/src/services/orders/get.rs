//! # Order Retrieval Service
//!
//! Backs `GET /orders/{id}`: one order with its items eagerly loaded.

use super::parse_id;
use crate::error::ApiError;
use crate::store::OrderStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for the `GET /orders/{id}` endpoint.
///
/// # Arguments
/// * `store` - The shared `OrderStore`.
/// * `id` - The order key, extracted from the URL path.
///
/// # Returns
/// - `200 OK` with the full order object.
/// - `404 Not Found` with `{"error": "Order not found"}` if no row matches.
pub async fn process(
    store: web::Data<dyn OrderStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let order = web::block(move || store.get_order(id)).await??;
    Ok(HttpResponse::Ok().json(order))
}
