//! End-to-end order flow against a real SQLite store
//!
//! Drives the submission coordinator with the on-disk store and a notifier
//! double, then reads back through the repository to check what actually
//! got persisted.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tempfile::TempDir;

use order_server::db::{DbService, repository};
use order_server::orders::{InvoiceDispatch, InvoiceNotifier, submit_order};
use shared::models::{Order, OrderStatus, PaymentMethod};
use shared::order::{NotificationError, OrderSession};

struct RecordingNotifier {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingNotifier {
    fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InvoiceNotifier for RecordingNotifier {
    async fn send_invoice(&self, _order: &Order) -> Result<(), NotificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(NotificationError("smtp relay down".into()));
        }
        Ok(())
    }
}

async fn open_db(dir: &TempDir) -> DbService {
    let path = dir.path().join("orders.db");
    DbService::new(path.to_str().unwrap()).await.unwrap()
}

fn cash_session() -> OrderSession {
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
async fn submit_persists_order_and_resets_session() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir).await;
    let notifier = RecordingNotifier::ok();
    let mut session = cash_session();

    let receipt = submit_order(&db, &notifier, &mut session).await.unwrap();
    assert!(receipt.invoice.is_sent());
    assert_eq!(notifier.call_count(), 1);

    // Session fully reset
    assert!(session.selection.is_empty());
    assert!(session.customer.name.is_empty());

    // Stored row matches the submission
    let stored = repository::order::find_by_id(&db.pool, &receipt.order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.total_amount, 500);
    assert_eq!(stored.payment_method, PaymentMethod::Cash);
    assert_eq!(stored.till_number, None);
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.order_items.len(), 1);
    assert_eq!(stored.order_items[0].product_name, "Mangrove Honey");
    assert_eq!(stored.order_items[0].quantity, 1);
    assert!(!stored.created_at.is_empty());
}

#[tokio::test]
async fn notification_failure_leaves_persisted_order_intact() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir).await;
    let notifier = RecordingNotifier::failing();
    let mut session = cash_session();

    let receipt = submit_order(&db, &notifier, &mut session).await.unwrap();
    let order_id = receipt.order.id.clone();

    match receipt.invoice {
        InvoiceDispatch::Failed(e) => assert!(e.to_string().contains("smtp relay down")),
        InvoiceDispatch::Sent => panic!("expected failed dispatch"),
    }
    // The order did succeed, so the session is still cleared
    assert!(session.selection.is_empty());

    // A later fetch still shows the order, unchanged and pending
    let stored = repository::order::find_by_id(&db.pool, &order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.total_amount, 500);
}

#[tokio::test]
async fn line_items_round_trip_through_json_column() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir).await;
    let notifier = RecordingNotifier::ok();

    let mut session = cash_session();
    session
        .selection
        .select("terrestrial-honey", "Terrestrial Honey", "1kg", 1000);
    session.selection.set_quantity("terrestrial-honey", "1kg", 2);
    session.customer.payment_method = PaymentMethod::Mpesa;
    session.customer.till_number = "174379".into();
    session.customer.notes = "Call on arrival".into();

    let receipt = submit_order(&db, &notifier, &mut session).await.unwrap();
    assert_eq!(receipt.order.total_amount, 2500);

    let stored = repository::order::find_by_id(&db.pool, &receipt.order.id)
        .await
        .unwrap()
        .unwrap();
    // Line order and quantities preserved exactly
    assert_eq!(stored.order_items.len(), 2);
    assert_eq!(stored.order_items[0].product_id, "mangrove-honey");
    assert_eq!(stored.order_items[1].product_id, "terrestrial-honey");
    assert_eq!(stored.order_items[1].quantity, 2);
    assert_eq!(stored.order_items[1].unit_price, 1000);
    assert_eq!(stored.till_number.as_deref(), Some("174379"));
    assert_eq!(stored.order_notes.as_deref(), Some("Call on arrival"));
}

#[tokio::test]
async fn list_returns_orders_newest_first() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir).await;
    let notifier = RecordingNotifier::ok();

    let mut ids = Vec::new();
    for i in 0..3 {
        let mut session = cash_session();
        session.customer.name = format!("Customer {i}");
        let receipt = submit_order(&db, &notifier, &mut session).await.unwrap();
        ids.push(receipt.order.id);
    }

    let all = repository::order::find_all(&db.pool, 50, 0).await.unwrap();
    assert_eq!(all.len(), 3);
    // Timestamps have second precision; same-second inserts fall back to id
    // order, so just check the set and pagination behave
    let listed: Vec<_> = all.iter().map(|o| o.id.clone()).collect();
    for id in &ids {
        assert!(listed.contains(id));
    }

    let page = repository::order::find_all(&db.pool, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    let rest = repository::order::find_all(&db.pool, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
}

#[tokio::test]
async fn missing_order_lookup_returns_none() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir).await;

    let found = repository::order::find_by_id(&db.pool, "no-such-order")
        .await
        .unwrap();
    assert!(found.is_none());
}
