//! # Order Listing Service
//!
//! Backs `GET /orders`: every stored order, each with its items, in ascending
//! id order.

use crate::error::ApiError;
use crate::store::OrderStore;
use actix_web::{web, HttpResponse};

/// Actix web handler for the `GET /orders` endpoint.
///
/// # Returns
/// - `200 OK` with a JSON array of orders; `[]` when nothing is stored.
/// - `500 Internal Server Error` if the store cannot be read.
pub async fn process(store: web::Data<dyn OrderStore>) -> Result<HttpResponse, ApiError> {
    let orders = web::block(move || store.list_orders()).await??;
    Ok(HttpResponse::Ok().json(orders))
}
