//! Collaborator traits for the submission workflow
//!
//! The coordinator only ever talks to these two seams, so tests can exercise
//! the full workflow against in-memory doubles.

use async_trait::async_trait;

use shared::models::{Order, OrderCreate};
use shared::order::{NotificationError, PersistenceError};

/// Persistence collaborator: one insert per successful submission
///
/// An insert either returns the full stored row (generated id and
/// timestamps included) or an error; a write is never silently dropped.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_order(&self, draft: OrderCreate) -> Result<Order, PersistenceError>;
}

/// Email-dispatch collaborator: renders and sends one invoice per call
///
/// No deduplication guard exists here, so the coordinator must call this
/// exactly once per successful order. Retry policy, if any, also belongs to
/// the caller; implementations make a single attempt.
#[async_trait]
pub trait InvoiceNotifier: Send + Sync {
    async fn send_invoice(&self, order: &Order) -> Result<(), NotificationError>;
}
