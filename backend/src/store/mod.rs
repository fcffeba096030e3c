//! # Persistence Gateway
//!
//! `OrderStore` is the seam between the HTTP handlers and the relational store.
//! The application receives one implementation at startup (see `main.rs`) and
//! shares it with every worker as `web::Data<dyn OrderStore>`, so tests can swap
//! in an in-memory database or a double.
//!
//! ## Operations
//! - `create_order`: inserts an order and all of its items atomically.
//! - `list_orders`: every order with its items, in ascending id order.
//! - `get_order`: one order with its items, or `StoreError::NotFound`.
//! - `update_order`: overwrites the order's fields and replaces its items.
//!   Previous item rows are deleted, not left detached.
//! - `delete_order`: removes the order; its items are removed with it.

mod sqlite;

pub use sqlite::SqliteOrderStore;

use common::model::order::Order;
use common::requests::OrderRequest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("order {0} not found")]
    NotFound(i64),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database connection lock poisoned")]
    Poisoned,
}

/// Blocking CRUD operations over the Order/Item pair.
///
/// Implementations are called from actix's blocking thread pool.
pub trait OrderStore: Send + Sync {
    fn create_order(&self, request: &OrderRequest) -> Result<Order, StoreError>;

    fn list_orders(&self) -> Result<Vec<Order>, StoreError>;

    fn get_order(&self, id: i64) -> Result<Order, StoreError>;

    fn update_order(&self, id: i64, request: &OrderRequest) -> Result<Order, StoreError>;

    fn delete_order(&self, id: i64) -> Result<(), StoreError>;
}
