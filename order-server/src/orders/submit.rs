//! Submission coordinator
//!
//! Turns accumulator state + customer form fields into a persisted order and
//! a best-effort invoice email. The workflow is a two-step saga:
//!
//! 1. persist the order; failure aborts with the session untouched
//! 2. send the invoice; failure is reported but never unwinds the write
//!
//! The session is reset exactly when step 1 succeeded, so a placed order can
//! never be double-submitted from stale form state, and a failed write keeps
//! everything for retry.

use tracing::{error, info, warn};

use shared::models::{Order, OrderCreate};
use shared::order::{NotificationError, OrderSession, SubmitError, ValidationError};

use super::traits::{InvoiceNotifier, OrderStore};

/// Invoice email outcome for one submitted order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceDispatch {
    Sent,
    Failed(NotificationError),
}

impl InvoiceDispatch {
    pub fn is_sent(&self) -> bool {
        matches!(self, InvoiceDispatch::Sent)
    }
}

/// Result of a successful submission: the stored order plus the invoice
/// outcome
///
/// Carrying the notification result here (rather than as an error) makes the
/// partial-failure policy explicit: once the write succeeds the order stands,
/// and email delivery is best-effort.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub order: Order,
    pub invoice: InvoiceDispatch,
}

/// Validate and submit one in-progress order
///
/// Preconditions are checked before any I/O: a non-empty selection and
/// non-blank required customer fields. Optional fields are stored as NULL
/// when blank.
pub async fn submit_order(
    store: &dyn OrderStore,
    notifier: &dyn InvoiceNotifier,
    session: &mut OrderSession,
) -> Result<SubmitReceipt, SubmitError> {
    validate(session)?;

    let draft = build_draft(session);
    let total = draft.total_amount;

    let order = match store.insert_order(draft).await {
        Ok(order) => order,
        Err(e) => {
            error!(error = %e, "order persistence failed");
            return Err(e.into());
        }
    };
    info!(order_id = %order.id, total_amount = total, "order persisted");

    let invoice = match notifier.send_invoice(&order).await {
        Ok(()) => {
            info!(order_id = %order.id, "invoice email sent");
            InvoiceDispatch::Sent
        }
        Err(e) => {
            // The write succeeded; the order stands regardless.
            warn!(order_id = %order.id, error = %e, "invoice email failed");
            InvoiceDispatch::Failed(e)
        }
    };

    session.reset();

    Ok(SubmitReceipt { order, invoice })
}

fn validate(session: &OrderSession) -> Result<(), ValidationError> {
    if session.selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    let customer = &session.customer;
    for (value, field) in [
        (&customer.name, "customer_name"),
        (&customer.email, "customer_email"),
        (&customer.phone, "customer_phone"),
        (&customer.address, "delivery_address"),
    ] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

fn build_draft(session: &OrderSession) -> OrderCreate {
    let customer = &session.customer;
    OrderCreate {
        customer_name: customer.name.trim().to_string(),
        customer_email: customer.email.trim().to_string(),
        customer_phone: customer.phone.trim().to_string(),
        delivery_address: customer.address.trim().to_string(),
        order_items: session.selection.lines().to_vec(),
        total_amount: session.selection.total(),
        payment_method: customer.payment_method,
        till_number: blank_to_none(&customer.till_number),
        order_notes: blank_to_none(&customer.notes),
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use shared::models::{OrderStatus, PaymentMethod};
    use shared::order::PersistenceError;

    use super::*;

    /// In-memory store double; counts inserts and optionally fails
    #[derive(Default)]
    struct MemoryStore {
        inserts: AtomicUsize,
        fail: bool,
        last_draft: Mutex<Option<OrderCreate>>,
    }

    impl MemoryStore {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn insert_count(&self) -> usize {
            self.inserts.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OrderStore for MemoryStore {
        async fn insert_order(&self, draft: OrderCreate) -> Result<Order, PersistenceError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PersistenceError("connection refused".into()));
            }
            *self.last_draft.lock().unwrap() = Some(draft.clone());
            Ok(Order {
                id: "abc12345-0000-0000-0000-000000000000".into(),
                customer_name: draft.customer_name,
                customer_email: draft.customer_email,
                customer_phone: draft.customer_phone,
                delivery_address: draft.delivery_address,
                order_items: draft.order_items,
                total_amount: draft.total_amount,
                payment_method: draft.payment_method,
                till_number: draft.till_number,
                order_notes: draft.order_notes,
                status: OrderStatus::Pending,
                created_at: "2025-06-01T09:30:00+00:00".into(),
                updated_at: "2025-06-01T09:30:00+00:00".into(),
            })
        }
    }

    /// Notifier double; counts calls and optionally fails
    #[derive(Default)]
    struct MemoryNotifier {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MemoryNotifier {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InvoiceNotifier for MemoryNotifier {
        async fn send_invoice(&self, _order: &Order) -> Result<(), NotificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(NotificationError("provider unavailable".into()));
            }
            Ok(())
        }
    }

    fn session_with_one_line() -> OrderSession {
        let mut session = OrderSession::new();
        session
            .selection
            .select("mangrove-honey", "Mangrove Honey", "380g", 500);
        session.customer.name = "Jane Doe".into();
        session.customer.email = "jane@example.com".into();
        session.customer.phone = "+254700000000".into();
        session.customer.address = "Mombasa".into();
        session.customer.payment_method = PaymentMethod::Cash;
        session
    }

    #[tokio::test]
    async fn empty_selection_performs_no_io() {
        let store = MemoryStore::default();
        let notifier = MemoryNotifier::default();
        let mut session = OrderSession::new();
        session.customer = session_with_one_line().customer;

        let err = submit_order(&store, &notifier, &mut session)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SubmitError::Validation(ValidationError::EmptySelection)
        );
        assert_eq!(store.insert_count(), 0);
        assert_eq!(notifier.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_required_field_performs_no_io() {
        let store = MemoryStore::default();
        let notifier = MemoryNotifier::default();
        let mut session = session_with_one_line();
        session.customer.email = "   ".into();

        let err = submit_order(&store, &notifier, &mut session)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SubmitError::Validation(ValidationError::MissingField("customer_email"))
        );
        assert_eq!(store.insert_count(), 0);
        assert_eq!(notifier.call_count(), 0);
        assert_eq!(session.selection.len(), 1);
    }

    #[tokio::test]
    async fn successful_submit_stores_draft_and_resets_session() {
        let store = MemoryStore::default();
        let notifier = MemoryNotifier::default();
        let mut session = session_with_one_line();

        let receipt = submit_order(&store, &notifier, &mut session)
            .await
            .unwrap();

        assert!(receipt.invoice.is_sent());
        assert_eq!(receipt.order.total_amount, 500);
        assert_eq!(notifier.call_count(), 1);

        let draft = store.last_draft.lock().unwrap().clone().unwrap();
        assert_eq!(draft.total_amount, 500);
        assert_eq!(draft.payment_method, PaymentMethod::Cash);
        assert_eq!(draft.till_number, None);
        assert_eq!(draft.order_notes, None);

        // Accumulator cleared, form blanked
        assert!(session.selection.is_empty());
        assert!(session.customer.name.is_empty());
    }

    #[tokio::test]
    async fn persistence_failure_preserves_session_and_skips_notifier() {
        let store = MemoryStore::failing();
        let notifier = MemoryNotifier::default();
        let mut session = session_with_one_line();

        let err = submit_order(&store, &notifier, &mut session)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Persistence(_)));
        assert_eq!(store.insert_count(), 1);
        assert_eq!(notifier.call_count(), 0);

        // Everything kept for retry
        assert_eq!(session.selection.len(), 1);
        assert_eq!(session.customer.name, "Jane Doe");
    }

    #[tokio::test]
    async fn notification_failure_keeps_order_and_clears_session() {
        let store = MemoryStore::default();
        let notifier = MemoryNotifier::failing();
        let mut session = session_with_one_line();

        let receipt = submit_order(&store, &notifier, &mut session)
            .await
            .unwrap();

        match &receipt.invoice {
            InvoiceDispatch::Failed(e) => {
                assert!(e.to_string().contains("provider unavailable"))
            }
            InvoiceDispatch::Sent => panic!("expected failed dispatch"),
        }
        // Order was persisted and stands
        assert_eq!(store.insert_count(), 1);
        assert_eq!(receipt.order.status, OrderStatus::Pending);
        // Session still cleared, since the order did succeed
        assert!(session.selection.is_empty());
    }

    #[tokio::test]
    async fn notifier_is_called_exactly_once_per_order() {
        let store = MemoryStore::default();
        let notifier = MemoryNotifier::default();
        let mut session = session_with_one_line();

        submit_order(&store, &notifier, &mut session)
            .await
            .unwrap();

        assert_eq!(notifier.call_count(), 1);
    }

    #[tokio::test]
    async fn optional_fields_are_kept_when_present() {
        let store = MemoryStore::default();
        let notifier = MemoryNotifier::default();
        let mut session = session_with_one_line();
        session.customer.payment_method = PaymentMethod::Mpesa;
        session.customer.till_number = " 174379 ".into();
        session.customer.notes = "Leave at the gate".into();

        submit_order(&store, &notifier, &mut session)
            .await
            .unwrap();

        let draft = store.last_draft.lock().unwrap().clone().unwrap();
        assert_eq!(draft.till_number.as_deref(), Some("174379"));
        assert_eq!(draft.order_notes.as_deref(), Some("Leave at the gate"));
    }
}
