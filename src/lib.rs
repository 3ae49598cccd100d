// Library root for the Customer REST API

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use db::Database;
pub use error::ApiError;
pub use models::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
