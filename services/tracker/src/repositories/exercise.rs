//! Exercise repository for database operations

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::debug;

use super::ExerciseStore;
use crate::models::exercise::{Exercise, LogFilter, NewExercise};

/// PostgreSQL exercise repository
#[derive(Clone)]
pub struct PgExerciseStore {
    pool: PgPool,
}

impl PgExerciseStore {
    /// Create a new exercise repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseStore for PgExerciseStore {
    async fn append(&self, exercise: &NewExercise) -> DatabaseResult<Exercise> {
        let stored = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, duration, date
            "#,
        )
        .bind(exercise.user_id)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        debug!("Stored exercise {} for user {}", stored.id, stored.user_id);
        Ok(stored)
    }

    async fn find_log(&self, filter: &LogFilter) -> DatabaseResult<Vec<Exercise>> {
        // A NULL bound or limit disables that clause
        let log = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, user_id, description, duration, date
            FROM exercises
            WHERE user_id = $1
              AND ($2::timestamptz IS NULL OR date >= $2)
              AND ($3::timestamptz IS NULL OR date <= $3)
            ORDER BY date ASC, created_at ASC, id ASC
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use common::database::{DatabaseConfig, init_pool, run_migrations};
    use uuid::Uuid;

    use super::*;
    use crate::validation::start_of_day;

    async fn store() -> PgExerciseStore {
        let config = DatabaseConfig::from_env().unwrap();
        let pool = init_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        PgExerciseStore::new(pool)
    }

    async fn log_entry(store: &PgExerciseStore, user_id: Uuid, description: &str, day: (i32, u32, u32)) {
        let date = NaiveDate::from_ymd_opt(day.0, day.1, day.2).unwrap();
        store
            .append(&NewExercise {
                user_id,
                description: description.to_string(),
                duration: 30,
                date: start_of_day(date),
            })
            .await
            .unwrap();
    }

    fn descriptions(log: &[Exercise]) -> Vec<&str> {
        log.iter().map(|e| e.description.as_str()).collect()
    }

    async fn cleanup(store: &PgExerciseStore, user_id: Uuid) {
        sqlx::query("DELETE FROM exercises WHERE user_id = $1")
            .bind(user_id)
            .execute(&store.pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_find_log_bounds_and_limit() {
        let store = store().await;
        let user_id = Uuid::new_v4();

        log_entry(&store, user_id, "mar", (2024, 3, 1)).await;
        log_entry(&store, user_id, "jan", (2024, 1, 1)).await;
        log_entry(&store, user_id, "feb", (2024, 2, 1)).await;
        log_entry(&store, Uuid::new_v4(), "other", (2024, 2, 1)).await;

        let all = store
            .find_log(&LogFilter { user_id, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(descriptions(&all), ["jan", "feb", "mar"]);

        let day = |m| start_of_day(NaiveDate::from_ymd_opt(2024, m, 1).unwrap());

        let ranged = store
            .find_log(&LogFilter {
                user_id,
                from: Some(day(2)),
                to: Some(day(3)),
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(descriptions(&ranged), ["feb", "mar"]);

        let from_only = store
            .find_log(&LogFilter { user_id, from: Some(day(2)), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(descriptions(&from_only), ["feb", "mar"]);

        let to_only = store
            .find_log(&LogFilter { user_id, to: Some(day(1)), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(descriptions(&to_only), ["jan"]);

        let limited = store
            .find_log(&LogFilter { user_id, limit: Some(2), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(descriptions(&limited), ["jan", "feb"]);

        let none = store
            .find_log(&LogFilter { user_id, limit: Some(0), ..Default::default() })
            .await
            .unwrap();
        assert!(none.is_empty());

        cleanup(&store, user_id).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn test_find_log_same_day_keeps_insertion_order() {
        let store = store().await;
        let user_id = Uuid::new_v4();

        for description in ["first", "second", "third"] {
            log_entry(&store, user_id, description, (2024, 5, 5)).await;
        }

        let log = store
            .find_log(&LogFilter { user_id, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(descriptions(&log), ["first", "second", "third"]);

        cleanup(&store, user_id).await;
    }
}
