//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health        - Health check
//!
//! # Shoes
//! POST   /zapatos       - Create a shoe
//! GET    /zapatos       - List all shoes
//! GET    /zapatos/{id}  - Fetch one shoe
//! PUT    /zapatos/{id}  - Update a shoe
//! DELETE /zapatos/{id}  - Delete a shoe
//! ```

pub mod shoes;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the shoe routes router.
pub fn shoe_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shoes::create).get(shoes::index))
        .route(
            "/{id}",
            get(shoes::show).put(shoes::update).delete(shoes::destroy),
        )
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/zapatos", shoe_routes())
}
