//! Catalog API
//!
//! Read-only product list that drives the order form's checkboxes.

use axum::{Json, Router, extract::State, routing::get};

use shared::models::Product;

use crate::core::ServerState;

/// Catalog router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/catalog", get(list))
}

/// GET /api/catalog - all sellable products with variants
async fn list(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}
