//! Order wire types

use serde::{Deserialize, Serialize};

use crate::models::PaymentMethod;

/// One selected (product, size) with a quantity
///
/// Uniquely identified by `(product_id, size)` within a selection. The unit
/// price is copied from the catalog variant when the line is created; it is
/// never taken from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub size: String,
    /// Price per unit in Kenyan shillings
    pub unit_price: i64,
    /// Always ≥ 1
    pub quantity: i64,
}

impl OrderLine {
    /// Line subtotal: unit price × quantity
    pub fn subtotal(&self) -> i64 {
        self.unit_price * self.quantity
    }
}

/// Customer-entered checkout fields
///
/// Name, email, phone and address are required at submission; the rest are
/// optional. Blank optional fields are persisted as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,
    pub till_number: String,
    pub notes: String,
}
