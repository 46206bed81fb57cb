//! Order Model

use serde::{Deserialize, Serialize};

use crate::order::OrderLine;

/// Order status lifecycle
///
/// Public submissions always start at `Pending`; later transitions belong to
/// the admin surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

/// Payment method chosen at checkout
///
/// `Mpesa` may carry an optional till number on the order; `Cash` is paid on
/// delivery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Mpesa,
    Cash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Mpesa => "mpesa",
            PaymentMethod::Cash => "cash",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mpesa" => Some(PaymentMethod::Mpesa),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }
}

/// Order entity (stored row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    /// Line-item snapshots taken at submission time
    pub order_items: Vec<OrderLine>,
    /// Total in Kenyan shillings, always Σ(unit_price × quantity)
    pub total_amount: i64,
    pub payment_method: PaymentMethod,
    pub till_number: Option<String>,
    pub order_notes: Option<String>,
    pub status: OrderStatus,
    /// RFC 3339 UTC timestamps
    pub created_at: String,
    pub updated_at: String,
}

/// Create order payload (generated fields filled in by the store)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: String,
    pub order_items: Vec<OrderLine>,
    pub total_amount: i64,
    pub payment_method: PaymentMethod,
    pub till_number: Option<String>,
    pub order_notes: Option<String>,
}
