// Handlers module
// HTTP handlers for the REST API

pub mod customers;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::db::Database;
use crate::handlers::customers::{
    create_customer, delete_customer, get_customer, init_data, update_customer,
};
use crate::middleware::create_middleware_stack;

/// Service greeting handler
/// Returns a constant payload with 200 status
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": "Hello, ITMX!" })))
}

/// Create the Axum router with all endpoints and middleware
pub fn create_router(database: Arc<Database>) -> Router {
    Router::new()
        // Service greeting
        .route("/", get(root))
        // Customer management endpoints
        .route("/customers", post(create_customer))
        .route("/customers/:id", get(get_customer))
        .route("/customers/:id", put(update_customer))
        .route("/customers/:id", delete(delete_customer))
        // Sample data seeding
        .route("/initData", post(init_data))
        // Add shared state (database connection)
        .with_state(database)
        // Apply middleware stack
        .layer(create_middleware_stack())
}
