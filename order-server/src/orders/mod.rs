//! Order Submission
//!
//! The coordinator that turns an [`shared::OrderSession`] into a persisted
//! order plus a best-effort invoice email, and the traits it sequences:
//!
//! - **traits**: [`OrderStore`] (persistence) and [`InvoiceNotifier`] (email)
//! - **submit**: the two-step write-then-notify workflow

pub mod submit;
pub mod traits;

pub use submit::{InvoiceDispatch, SubmitReceipt, submit_order};
pub use traits::{InvoiceNotifier, OrderStore};
