//! # Order Deletion Service
//!
//! Backs `DELETE /orders/{id}`. Removing the order also removes its items.

use super::parse_id;
use crate::error::ApiError;
use crate::store::OrderStore;
use actix_web::{web, HttpResponse};
use common::responses::MessageResponse;
use log::info;

/// Actix web handler for the `DELETE /orders/{id}` endpoint.
///
/// # Returns
/// - `200 OK` with `{"message": "Success delete"}`.
/// - `404 Not Found` if the order does not exist.
pub async fn process(
    store: web::Data<dyn OrderStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    web::block(move || store.delete_order(id)).await??;
    info!("Deleted order {}", id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Success delete".to_string(),
    }))
}
