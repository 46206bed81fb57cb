//! Order Session
//!
//! Owned state for one in-progress order: the selection accumulator plus the
//! customer form. Passed by mutable reference into the submission
//! coordinator, never read from ambient globals, so retry-after-failure
//! semantics are explicit at the call site.

use serde::{Deserialize, Serialize};

use super::selection::OrderSelection;
use super::types::CustomerForm;

/// One in-progress order: selection + customer form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSession {
    pub selection: OrderSelection,
    pub customer: CustomerForm,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the selection and blank the form
    ///
    /// Called by the coordinator once the order row is persisted; on a failed
    /// write the session is left untouched so the user can retry without
    /// re-entering everything.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.customer = CustomerForm::default();
    }
}
