//! # Order Service Module
//!
//! Routes every `/orders` request to its handler. Each handler is a thin
//! translation layer: decode the JSON body, call the `OrderStore`, and encode
//! the outcome (or an `ApiError`) as JSON.
//!
//! ## Sub-modules:
//! - `create`: `POST /orders`
//! - `list`: `GET /orders`
//! - `get`: `GET /orders/{id}`
//! - `update`: `PUT /orders/{id}`
//! - `delete`: `DELETE /orders/{id}`

mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::error::ApiError;
use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;
use log::debug;

/// The base path for all order endpoints.
const API_PATH: &str = "/orders";

/// Configures and returns the Actix `Scope` for the order routes.
///
/// # Registered Routes:
///
/// *   **`POST /orders`**: `create::process`, answers `201` with `{id, orderedAt, customerName, items}`.
/// *   **`GET /orders`**: `list::process`, answers `200` with every order.
/// *   **`GET /orders/{id}`**: `get::process`, answers `200` or `404`.
/// *   **`PUT /orders/{id}`**: `update::process`, answers `200`, `400` or `404`.
/// *   **`DELETE /orders/{id}`**: `delete::process`, answers `200 {"message": "Success delete"}` or `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// Converts the raw path segment to a primary key.
///
/// A segment that is not an integer cannot match any row, so it is reported
/// exactly like a missing order.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse().map_err(|_| {
        debug!("Rejecting non-numeric order id {:?}", raw);
        ApiError::NotFound
    })
}
