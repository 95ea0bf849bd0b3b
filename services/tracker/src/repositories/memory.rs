//! In-process store used by tests and `STORAGE=memory` deployments

use std::sync::Arc;

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{ExerciseStore, UserStore};
use crate::models::{
    User,
    exercise::{Exercise, LogFilter, NewExercise},
};

#[derive(Debug, Default)]
struct Tables {
    /// Insertion order is listing order
    users: Vec<User>,
    /// Insertion order breaks ties between equal dates
    exercises: Vec<Exercise>,
}

/// Volatile store backing both users and exercises
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, username: &str) -> DatabaseResult<User> {
        let mut tables = self.tables.lock().await;

        // Check and insert under one lock, like a unique index
        if tables.users.iter().any(|user| user.username == username) {
            return Err(DatabaseError::UniqueViolation {
                constraint: "users_username_key".to_string(),
            });
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn get_all(&self) -> DatabaseResult<Vec<User>> {
        Ok(self.tables.lock().await.users.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|user| user.id == id).cloned())
    }
}

#[async_trait]
impl ExerciseStore for MemoryStore {
    async fn append(&self, exercise: &NewExercise) -> DatabaseResult<Exercise> {
        let stored = Exercise {
            id: Uuid::new_v4(),
            user_id: exercise.user_id,
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
        };
        self.tables.lock().await.exercises.push(stored.clone());
        Ok(stored)
    }

    async fn find_log(&self, filter: &LogFilter) -> DatabaseResult<Vec<Exercise>> {
        let tables = self.tables.lock().await;

        let mut log: Vec<Exercise> = tables
            .exercises
            .iter()
            .filter(|exercise| exercise.user_id == filter.user_id)
            .filter(|exercise| filter.from.is_none_or(|from| exercise.date >= from))
            .filter(|exercise| filter.to.is_none_or(|to| exercise.date <= to))
            .cloned()
            .collect();

        // Stable sort keeps insertion order for equal dates
        log.sort_by_key(|exercise| exercise.date);

        if let Some(limit) = filter.limit {
            log.truncate(usize::try_from(limit).unwrap_or(0));
        }

        Ok(log)
    }
}
