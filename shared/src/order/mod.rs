//! Order Composition
//!
//! The in-progress side of an order, before anything is persisted:
//!
//! - **types**: line items and the customer form
//! - **selection**: the cart-style accumulator of (product, size) picks
//! - **session**: owned selection + form state for one in-progress order
//! - **error**: the workflow error taxonomy (validation / persistence /
//!   notification)

pub mod error;
pub mod selection;
pub mod session;
pub mod types;

pub use error::{NotificationError, PersistenceError, SubmitError, ValidationError};
pub use selection::OrderSelection;
pub use session::OrderSession;
pub use types::{CustomerForm, OrderLine};
