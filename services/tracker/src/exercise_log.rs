//! Exercise log: appending entries and answering filtered log queries

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::{
    directory::UserDirectory,
    error::{ApiError, ApiResult},
    models::exercise::{
        AddExerciseRequest, ExerciseResponse, LogEntry, LogFilter, LogQuery, LogResponse,
        NewExercise, calendar_date,
    },
    repositories::ExerciseStore,
    validation,
};

/// Owns per-user exercise history
#[derive(Clone)]
pub struct ExerciseLog {
    directory: UserDirectory,
    exercises: Arc<dyn ExerciseStore>,
}

impl ExerciseLog {
    pub fn new(directory: UserDirectory, exercises: Arc<dyn ExerciseStore>) -> Self {
        Self {
            directory,
            exercises,
        }
    }

    /// Append an exercise to a user's log
    ///
    /// The owner is resolved first, so an unknown id is reported as not
    /// found whatever the other fields hold. Nothing is written unless every
    /// field validates. A missing date means today (UTC).
    pub async fn add_exercise(
        &self,
        user_id: &str,
        request: &AddExerciseRequest,
    ) -> ApiResult<ExerciseResponse> {
        let user = self.directory.get_user_by_id(user_id).await?;

        let description = validation::parse_description(request.description.as_deref())
            .map_err(ApiError::Validation)?;
        let duration = validation::parse_duration(request.duration.as_deref())
            .map_err(ApiError::Validation)?;
        let date = validation::parse_optional_date(request.date.as_deref())
            .map_err(ApiError::Validation)?
            .unwrap_or_else(|| Utc::now().date_naive());

        let stored = self
            .exercises
            .append(&NewExercise {
                user_id: user.id,
                description,
                duration,
                date: validation::start_of_day(date),
            })
            .await?;

        info!("Logged {} minutes for user {}", stored.duration, user.id);

        Ok(ExerciseResponse {
            id: user.id,
            username: user.username,
            date: calendar_date(&stored.date),
            duration: stored.duration,
            description: stored.description,
        })
    }

    /// A user's exercises within `[from, to]`, earliest first, at most `limit`
    pub async fn get_log(&self, user_id: &str, query: &LogQuery) -> ApiResult<LogResponse> {
        let user = self.directory.get_user_by_id(user_id).await?;

        let from =
            validation::parse_optional_date(query.from.as_deref()).map_err(ApiError::Validation)?;
        let to =
            validation::parse_optional_date(query.to.as_deref()).map_err(ApiError::Validation)?;
        let limit = validation::parse_limit(query.limit.as_deref()).map_err(ApiError::Validation)?;

        let log: Vec<LogEntry> = self
            .exercises
            .find_log(&LogFilter {
                user_id: user.id,
                from: from.map(validation::start_of_day),
                to: to.map(validation::start_of_day),
                limit,
            })
            .await?
            .into_iter()
            .map(LogEntry::from)
            .collect();

        Ok(LogResponse {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        })
    }
}
