//! Exercise models for the tracker service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rendering used for every date in a response, e.g. `Mon Jan 01 2024`
pub const CALENDAR_DATE_FORMAT: &str = "%a %b %d %Y";

/// Render a stored timestamp as a calendar-date string
pub fn calendar_date(date: &DateTime<Utc>) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// Stored exercise entry
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: DateTime<Utc>,
}

/// Validated exercise ready to be persisted
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: DateTime<Utc>,
}

/// Validated log query handed to the store
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    pub user_id: Uuid,
    /// Inclusive lower bound on `date`
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `date`
    pub to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

/// Request for appending an exercise
///
/// Fields stay raw strings until the service validates them; `duration`
/// also accepts a JSON number.
#[derive(Debug, Default, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Query parameters for log retrieval
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Response for a newly appended exercise, merged with its owner
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: i32,
    pub description: String,
}

/// A single rendered log entry
#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            date: calendar_date(&exercise.date),
            description: exercise.description,
            duration: exercise.duration,
        }
    }
}

/// Response for log retrieval
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}
