// Customer handlers
// HTTP handlers for customer management operations

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::{
    db::Database,
    error::ApiError,
    models::customer::{CreateCustomerRequest, UpdateCustomerRequest},
};

/// A path segment that does not parse as an unsigned integer is rejected
/// outright rather than coerced to a default id.
fn parse_customer_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation("Invalid customer id format"))
}

/// Surface the deserializer's own message on a malformed body.
fn bad_request(rejection: JsonRejection) -> ApiError {
    ApiError::validation(rejection.body_text())
}

/// Create a new customer
/// POST /customers
pub async fn create_customer(
    State(db): State<Arc<Database>>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(bad_request)?;

    info!("Creating customer with name: {}", request.name);
    let customer = db.create_customer(&request)?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// Get customer by ID
/// GET /customers/:id
pub async fn get_customer(
    State(db): State<Arc<Database>>,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_customer_id(&customer_id)?;

    let customer = db.get_customer(id)?;

    Ok((StatusCode::OK, Json(customer)))
}

/// Update customer by ID
/// PUT /customers/:id
pub async fn update_customer(
    State(db): State<Arc<Database>>,
    Path(customer_id): Path<String>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_customer_id(&customer_id)?;
    let Json(request) = payload.map_err(bad_request)?;

    info!("Updating customer with id: {}", id);
    db.update_customer(id, &request)?;

    // The response echoes the submitted fields, not the stored row
    Ok((StatusCode::OK, Json(request)))
}

/// Delete customer by ID
/// DELETE /customers/:id
/// Reports success whether or not a matching row existed.
pub async fn delete_customer(
    State(db): State<Arc<Database>>,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_customer_id(&customer_id)?;

    db.delete_customer(id)?;

    Ok((StatusCode::OK, Json(json!({ "message": "Record deleted" }))))
}

/// Insert the fixed sample records
/// POST /initData
pub async fn init_data(
    State(db): State<Arc<Database>>,
) -> Result<impl IntoResponse, ApiError> {
    db.seed_customers()?;

    Ok((StatusCode::OK, Json(json!({ "message": "Data initialized" }))))
}
