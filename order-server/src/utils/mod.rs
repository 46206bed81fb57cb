//! Utilities
//!
//! Cross-cutting helpers: the HTTP error envelope, result aliases, logging
//! setup, and input validation.

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
