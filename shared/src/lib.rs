//! Shared types for the Casina Farms order service
//!
//! Domain types used across the server and any client crate: catalog and
//! order models, the in-progress order selection, and the workflow error
//! taxonomy. No I/O lives here.

pub mod models;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Order workflow re-exports (for convenient access)
pub use order::{OrderLine, OrderSelection, OrderSession, SubmitError};
