use serde::{Deserialize, Serialize};

/// Customer record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub age: i64,
}

/// Payload accepted by the create endpoint. The id is assigned by the
/// database; an id field in the request body is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub age: i64,
}

/// Payload accepted by the update endpoint. Fields left out of the body are
/// not touched; fields that are present always overwrite the stored value,
/// including `0` and the empty string.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

impl UpdateCustomerRequest {
    /// An update with no fields at all has nothing to write, so it is
    /// rejected before reaching the database.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_none() && self.age.is_none() {
            return Err(
                "At least one field (name or age) must be provided for update".to_string(),
            );
        }

        Ok(())
    }
}
