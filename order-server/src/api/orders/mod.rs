//! Order API
//!
//! Public submission plus read-only lookups. There is no public update
//! path; an order row is written exactly once per submission.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit).get(handler::list))
        .route("/{id}", get(handler::get_by_id))
}
