//! User directory: registration, listing and lookup of users

use std::sync::Arc;

use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::User,
    repositories::UserStore,
    validation,
};

/// Owns user identity and username uniqueness
#[derive(Clone)]
pub struct UserDirectory {
    users: Arc<dyn UserStore>,
}

impl UserDirectory {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register a new user under a unique, non-blank username
    pub async fn create_user(&self, username: Option<&str>) -> ApiResult<User> {
        let username = validation::parse_username(username).map_err(ApiError::Validation)?;

        match self.users.create(&username).await {
            Ok(user) => {
                info!("Registered user {} ({})", user.username, user.id);
                Ok(user)
            }
            Err(err) if err.is_unique_violation() => {
                Err(ApiError::Conflict("Username already exists".to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        Ok(self.users.get_all().await?)
    }

    /// Resolve a user; malformed identifiers are reported as unknown
    pub async fn get_user_by_id(&self, id: &str) -> ApiResult<User> {
        let not_found = || ApiError::NotFound("User not found".to_string());

        let id = validation::parse_user_id(id).ok_or_else(not_found)?;
        self.users.find_by_id(id).await?.ok_or_else(not_found)
    }
}
