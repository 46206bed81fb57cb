//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shared::models::{Order, PaymentMethod};
use shared::order::{OrderSession, SubmitError};

use crate::core::ServerState;
use crate::db::repository;
use crate::orders::{InvoiceDispatch, submit_order};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// One requested line: the server resolves the unit price from the catalog
#[derive(Debug, Deserialize)]
pub struct SubmitItem {
    pub product_id: String,
    pub size: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Order submission payload
#[derive(Debug, Deserialize)]
pub struct SubmitOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub till_number: Option<String>,
    #[serde(default)]
    pub order_notes: Option<String>,
    pub items: Vec<SubmitItem>,
}

/// Submission response: the stored order plus the invoice outcome
#[derive(Debug, Serialize)]
pub struct SubmitOrderResponse {
    pub order: Order,
    pub invoice_sent: bool,
    pub message: String,
}

/// POST /api/orders - submit an order and email the invoice
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<SubmitOrderRequest>,
) -> AppResult<Json<SubmitOrderResponse>> {
    validate_payload(&payload)?;

    let mut session = build_session(&state, payload)?;

    let receipt = submit_order(&state.db, state.mailer.as_ref(), &mut session)
        .await
        .map_err(|e| match e {
            SubmitError::Validation(v) => AppError::validation(v.to_string()),
            SubmitError::Persistence(p) => AppError::database(p.to_string()),
        })?;

    let (invoice_sent, message) = match &receipt.invoice {
        InvoiceDispatch::Sent => (
            true,
            "Order submitted successfully! Invoice sent to your email.".to_string(),
        ),
        InvoiceDispatch::Failed(_) => (
            false,
            "Order placed but failed to send invoice email".to_string(),
        ),
    };

    Ok(Json(SubmitOrderResponse {
        order: receipt.order,
        invoice_sent,
        message,
    }))
}

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// GET /api/orders - list orders, newest first (paginated)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = repository::order::find_all(&state.db.pool, query.limit, query.offset).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} - single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = repository::order::find_by_id(&state.db.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(order))
}

fn validate_payload(payload: &SubmitOrderRequest) -> AppResult<()> {
    validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_email(&payload.customer_email, "customer_email")?;
    validate_required_text(&payload.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.delivery_address, "delivery_address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.till_number, "till_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.order_notes, "order_notes", MAX_NOTE_LEN)?;
    Ok(())
}

/// Build the request-scoped session, pricing every line from the catalog
fn build_session(state: &ServerState, payload: SubmitOrderRequest) -> AppResult<OrderSession> {
    let mut session = OrderSession::new();

    for item in &payload.items {
        let (product, variant) = state
            .catalog
            .find_variant(&item.product_id, &item.size)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "unknown product or size: {} ({})",
                    item.product_id, item.size
                ))
            })?;
        if !session.selection.select(
            product.id.as_str(),
            product.name.as_str(),
            variant.size.as_str(),
            variant.unit_price,
        ) {
            return Err(AppError::validation(format!(
                "duplicate line: {} ({})",
                item.product_id, item.size
            )));
        }
        // Quantity is clamped to ≥ 1 by the accumulator
        session
            .selection
            .set_quantity(&item.product_id, &item.size, item.quantity);
    }

    session.customer.name = payload.customer_name;
    session.customer.email = payload.customer_email;
    session.customer.phone = payload.customer_phone;
    session.customer.address = payload.delivery_address;
    session.customer.payment_method = payload.payment_method;
    session.customer.till_number = payload.till_number.unwrap_or_default();
    session.customer.notes = payload.order_notes.unwrap_or_default();

    Ok(session)
}
