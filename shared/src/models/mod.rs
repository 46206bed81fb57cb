//! Data Models
//!
//! Entity and payload types mirrored by the `orders` table and the catalog.

pub mod order;
pub mod product;

pub use order::{Order, OrderCreate, OrderStatus, PaymentMethod};
pub use product::{Product, ProductVariant};
