//! Product Model

use serde::{Deserialize, Serialize};

/// Sellable product with its size/price variants
///
/// Catalog data is immutable for the lifetime of a session; the order flow
/// only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier, e.g. "mangrove-honey"
    pub id: String,
    pub name: String,
    /// Display category, e.g. "Honey", "Seaweed Products"
    pub category: String,
    pub variants: Vec<ProductVariant>,
}

/// One (size, unit price) variant of a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Pack size label, e.g. "380g", "1kg", "300ml"
    pub size: String,
    /// Price in Kenyan shillings
    pub unit_price: i64,
}

impl Product {
    /// Find a variant by size label
    pub fn variant(&self, size: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.size == size)
    }
}
