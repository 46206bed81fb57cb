//! Workflow error taxonomy
//!
//! Three failure classes with different recovery semantics:
//!
//! | Error | Detected | Side effects |
//! |-------|----------|--------------|
//! | [`ValidationError`] | before any I/O | none |
//! | [`PersistenceError`] | order write failed | none; retryable |
//! | [`NotificationError`] | email failed after the write | order is final |

use thiserror::Error;

/// Rejected before any I/O; the user corrects the form and resubmits
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no products selected")]
    EmptySelection,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown product or size: {product_id} ({size})")]
    UnknownVariant { product_id: String, size: String },
}

/// The order write failed; no partial order exists and the session is kept
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to save order: {0}")]
pub struct PersistenceError(pub String);

/// The invoice email failed after a successful write; the order stands
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to send invoice email: {0}")]
pub struct NotificationError(pub String);

/// Failure of the submission workflow as a whole
///
/// Notification failure is deliberately absent here: once the write has
/// succeeded the submission is not a failure, and the outcome is reported in
/// the receipt instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
