//! Casina Farms Order Server
//!
//! HTTP service behind the Casina Farms order form: product catalog, order
//! submission with invoice email, and order lookups.
//!
//! # Module structure
//!
//! ```text
//! order-server/src/
//! ├── core/      # Config, state, server
//! ├── api/       # HTTP routes and handlers
//! ├── orders/    # Submission coordinator and collaborator traits
//! ├── invoice/   # Invoice rendering and email dispatch
//! ├── services/  # Catalog provider
//! ├── db/        # SQLite pool and repositories
//! └── utils/     # Errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod invoice;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResponse, AppResult, logger};
