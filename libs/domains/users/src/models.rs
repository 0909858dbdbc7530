use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, minted when the user is constructed
    pub id: Uuid,
    /// Full name (at least three characters, unique across users)
    pub full_name: String,
}

impl User {
    /// Build a new user with a freshly minted identifier
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            full_name: full_name.into(),
        }
    }
}

/// Request to create a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[serde(alias = "fullName")]
    #[validate(length(min = 3, message = "Full name must be greater than 3 letter"))]
    pub full_name: String,
}

impl CreateUserRequest {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

/// Boolean outcome of a create or delete call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OperationResult {
    pub result: bool,
}
