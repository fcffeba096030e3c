use super::{OrderStore, StoreError};
use common::model::item::Item;
use common::model::order::Order;
use common::requests::{ItemRequest, OrderRequest};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Created on every open; safe to run against an existing database.
const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS orders (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_name TEXT    NOT NULL,
        ordered_at    TEXT    NOT NULL
    );

    CREATE TABLE IF NOT EXISTS items (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        item_code   TEXT    NOT NULL,
        description TEXT    NOT NULL,
        quantity    INTEGER NOT NULL,
        order_id    INTEGER NOT NULL REFERENCES orders(id) ON DELETE CASCADE
    );

    CREATE INDEX IF NOT EXISTS idx_items_order_id ON items(order_id);
";

/// `OrderStore` backed by a single shared SQLite connection.
pub struct SqliteOrderStore {
    conn: Mutex<Connection>,
}

impl SqliteOrderStore {
    /// Opens (or creates) the database file at `path` and reconciles the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        info!("Opened order database at {}", path.as_ref().display());
        Self::init(conn)
    }

    /// Opens a private in-memory database. Data lives as long as the store.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        info!("Opened in-memory order database");
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        info!("Order schema ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl OrderStore for SqliteOrderStore {
    fn create_order(&self, request: &OrderRequest) -> Result<Order, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO orders (customer_name, ordered_at) VALUES (?1, ?2)",
            params![&request.customer_name, &request.ordered_at],
        )?;
        let id = tx.last_insert_rowid();
        let items = insert_items(&tx, id, &request.items)?;

        tx.commit()?;

        Ok(Order {
            id,
            customer_name: request.customer_name.clone(),
            ordered_at: request.ordered_at,
            items,
        })
    }

    fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        let conn = self.lock()?;

        // Load all items in one pass and attach them, instead of one query per order.
        let mut items_by_order: HashMap<i64, Vec<Item>> = HashMap::new();
        let mut item_stmt = conn.prepare(
            "SELECT id, item_code, description, quantity, order_id FROM items ORDER BY order_id, id",
        )?;
        let rows = item_stmt.query_map([], |row| Ok((row.get::<_, i64>(4)?, item_from_row(row)?)))?;
        for row in rows {
            let (order_id, item) = row?;
            items_by_order.entry(order_id).or_default().push(item);
        }

        let mut order_stmt =
            conn.prepare("SELECT id, customer_name, ordered_at FROM orders ORDER BY id")?;
        let orders = order_stmt
            .query_map([], order_from_row)?
            .map(|row| {
                row.map(|mut order| {
                    order.items = items_by_order.remove(&order.id).unwrap_or_default();
                    order
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(orders)
    }

    fn get_order(&self, id: i64) -> Result<Order, StoreError> {
        let conn = self.lock()?;

        let mut order = conn
            .query_row(
                "SELECT id, customer_name, ordered_at FROM orders WHERE id = ?1",
                params![id],
                order_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound(id))?;
        order.items = load_items(&conn, id)?;

        Ok(order)
    }

    fn update_order(&self, id: i64, request: &OrderRequest) -> Result<Order, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let updated = tx.execute(
            "UPDATE orders SET customer_name = ?1, ordered_at = ?2 WHERE id = ?3",
            params![&request.customer_name, &request.ordered_at, id],
        )?;
        if updated == 0 {
            // Dropping `tx` rolls back.
            return Err(StoreError::NotFound(id));
        }

        tx.execute("DELETE FROM items WHERE order_id = ?1", params![id])?;
        let items = insert_items(&tx, id, &request.items)?;

        tx.commit()?;

        Ok(Order {
            id,
            customer_name: request.customer_name.clone(),
            ordered_at: request.ordered_at,
            items,
        })
    }

    fn delete_order(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.lock()?;

        // Items go with the order through ON DELETE CASCADE.
        let deleted = conn.execute("DELETE FROM orders WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

fn insert_items(
    tx: &Transaction<'_>,
    order_id: i64,
    items: &[ItemRequest],
) -> Result<Vec<Item>, StoreError> {
    let mut stmt = tx.prepare_cached(
        "INSERT INTO items (item_code, description, quantity, order_id) VALUES (?1, ?2, ?3, ?4)",
    )?;

    let mut inserted = Vec::with_capacity(items.len());
    for item in items {
        stmt.execute(params![
            &item.item_code,
            &item.description,
            item.quantity,
            order_id
        ])?;
        inserted.push(Item {
            id: tx.last_insert_rowid(),
            item_code: item.item_code.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
        });
    }
    Ok(inserted)
}

fn load_items(conn: &Connection, order_id: i64) -> Result<Vec<Item>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, item_code, description, quantity FROM items WHERE order_id = ?1 ORDER BY id",
    )?;
    let items = stmt
        .query_map(params![order_id], item_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<Order> {
    Ok(Order {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        ordered_at: row.get(2)?,
        items: Vec::new(),
    })
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        item_code: row.get(1)?,
        description: row.get(2)?,
        quantity: row.get(3)?,
    })
}
