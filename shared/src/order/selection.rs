//! Selection Accumulator
//!
//! Cart-style state for one in-progress order. Mutations are synchronous and
//! single-threaded (driven by discrete UI events); the accumulator performs
//! no I/O.

use serde::{Deserialize, Serialize};

use super::types::OrderLine;

/// Accumulates (product, size) selections with quantities
///
/// Lines are keyed by `(product_id, size)`: re-selecting an existing pair is
/// a no-op, and quantity changes mutate the existing line in place. Insertion
/// order is preserved; invoice rendering depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSelection {
    lines: Vec<OrderLine>,
}

impl OrderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with quantity 1
    ///
    /// Returns false (and leaves the selection unchanged) if `(product_id,
    /// size)` is already selected.
    pub fn select(
        &mut self,
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        size: impl Into<String>,
        unit_price: i64,
    ) -> bool {
        let product_id = product_id.into();
        let size = size.into();
        if self.is_selected(&product_id, &size) {
            return false;
        }
        self.lines.push(OrderLine {
            product_id,
            product_name: product_name.into(),
            size,
            unit_price,
            quantity: 1,
        });
        true
    }

    /// Remove the matching line; idempotent (no error if absent)
    pub fn deselect(&mut self, product_id: &str, size: &str) {
        self.lines
            .retain(|line| !(line.product_id == product_id && line.size == size));
    }

    /// Update quantity on the matching line, clamped to ≥ 1
    ///
    /// No-op if the line does not exist.
    pub fn set_quantity(&mut self, product_id: &str, size: &str, quantity: i64) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id && line.size == size)
        {
            line.quantity = quantity.max(1);
        }
    }

    /// Whether `(product_id, size)` is currently selected
    pub fn is_selected(&self, product_id: &str, size: &str) -> bool {
        self.lines
            .iter()
            .any(|line| line.product_id == product_id && line.size == size)
    }

    /// Sum of line subtotals; zero when empty
    pub fn total(&self) -> i64 {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Drop all lines (after a successful submission or a page reset)
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
