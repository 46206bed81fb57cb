//! API routes
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`catalog`] - product catalog for the order form
//! - [`orders`] - order submission and lookups

pub mod catalog;
pub mod health;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
