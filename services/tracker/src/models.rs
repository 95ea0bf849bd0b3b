//! API models for request and response payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub mod exercise;

/// Stored user identity
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

/// Request for user registration
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Response for user operations
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub id: Uuid,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}
