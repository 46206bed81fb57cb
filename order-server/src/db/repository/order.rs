//! Order Repository
//!
//! One insert per successful submission, plus read access for the admin
//! surface. Line items travel through the `order_items` column as a JSON
//! array of snapshots.

use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use shared::models::{Order, OrderCreate, OrderStatus, PaymentMethod};
use shared::order::OrderLine;

use super::{RepoError, RepoResult};

/// Raw `orders` row; enums and items are decoded into [`Order`] afterwards
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    delivery_address: String,
    order_items: String,
    total_amount: i64,
    payment_method: String,
    till_number: Option<String>,
    order_notes: Option<String>,
    status: String,
    created_at: String,
    updated_at: String,
}

impl OrderRow {
    fn into_order(self) -> RepoResult<Order> {
        let order_items: Vec<OrderLine> = serde_json::from_str(&self.order_items)
            .map_err(|e| RepoError::Corrupt(format!("order {} items: {e}", self.id)))?;
        let payment_method = PaymentMethod::parse(&self.payment_method).ok_or_else(|| {
            RepoError::Corrupt(format!(
                "order {} payment_method: {}",
                self.id, self.payment_method
            ))
        })?;
        let status = OrderStatus::parse(&self.status)
            .ok_or_else(|| RepoError::Corrupt(format!("order {} status: {}", self.id, self.status)))?;
        Ok(Order {
            id: self.id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            delivery_address: self.delivery_address,
            order_items,
            total_amount: self.total_amount,
            payment_method,
            till_number: self.till_number,
            order_notes: self.order_notes,
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, customer_name, customer_email, customer_phone, \
     delivery_address, order_items, total_amount, payment_method, till_number, \
     order_notes, status, created_at, updated_at";

/// Insert a new order and return the stored row
pub async fn insert(pool: &SqlitePool, draft: OrderCreate) -> RepoResult<Order> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let items_json = serde_json::to_string(&draft.order_items)
        .map_err(|e| RepoError::Database(format!("serialize order items: {e}")))?;

    sqlx::query(
        "INSERT INTO orders (id, customer_name, customer_email, customer_phone, \
         delivery_address, order_items, total_amount, payment_method, till_number, \
         order_notes, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&draft.customer_name)
    .bind(&draft.customer_email)
    .bind(&draft.customer_phone)
    .bind(&draft.delivery_address)
    .bind(&items_json)
    .bind(draft.total_amount)
    .bind(draft.payment_method.as_str())
    .bind(&draft.till_number)
    .bind(&draft.order_notes)
    .bind(OrderStatus::Pending.as_str())
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;

    find_by_id(pool, &id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to read back created order".into()))
}

/// Find one order by id
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<Order>> {
    let row: Option<OrderRow> =
        sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM orders WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    row.map(OrderRow::into_order).transpose()
}

/// List orders, newest first
pub async fn find_all(pool: &SqlitePool, limit: i64, offset: i64) -> RepoResult<Vec<Order>> {
    let rows: Vec<OrderRow> = sqlx::query_as(&format!(
        "SELECT {SELECT_COLUMNS} FROM orders ORDER BY created_at DESC, id LIMIT ? OFFSET ?"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(OrderRow::into_order).collect()
}
