//! Repositories for database operations
//!
//! The service layer talks to storage only through [`UserStore`] and
//! [`ExerciseStore`]. Inserts report duplicate keys as
//! [`DatabaseError::UniqueViolation`], never as backend-specific codes.

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{
    User,
    exercise::{Exercise, LogFilter, NewExercise},
};

pub mod exercise;
pub mod memory;

pub use exercise::PgExerciseStore;
pub use memory::MemoryStore;

/// Storage for user identities
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; a taken username fails with a unique violation
    async fn create(&self, username: &str) -> DatabaseResult<User>;

    /// All users in insertion order
    async fn get_all(&self) -> DatabaseResult<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>>;
}

/// Storage for append-only exercise entries
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    async fn append(&self, exercise: &NewExercise) -> DatabaseResult<Exercise>;

    /// Entries matching the filter, ascending by date then insertion
    async fn find_log(&self, filter: &LogFilter) -> DatabaseResult<Vec<Exercise>>;
}

/// PostgreSQL user repository
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, username: &str) -> DatabaseResult<User> {
        info!("Creating new user: {}", username);

        let row = sqlx::query(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(User {
            id: row.get("id"),
            username: row.get("username"),
        })
    }

    async fn get_all(&self) -> DatabaseResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(user)
    }
}
