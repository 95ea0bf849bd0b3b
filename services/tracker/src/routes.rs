//! Tracker service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::ApiError,
    extract::{Params, Payload},
    models::{
        CreateUserRequest, UserResponse,
        exercise::{AddExerciseRequest, LogQuery},
    },
    state::AppState,
};

/// Create the router for the tracker service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/users", post(create_user).get(get_users))
        .route("/api/users/:id/exercises", post(add_exercise))
        .route("/api/users/:id/logs", get(get_log))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "exercise-tracker"
    }))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_directory
        .create_user(payload.username.as_deref())
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// List all users
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users: Vec<UserResponse> = state
        .user_directory
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

/// Append an exercise to a user's log
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<AddExerciseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let exercise = state.exercise_log.add_exercise(&id, &payload).await?;

    Ok(Json(exercise))
}

/// Get a user's exercise log, optionally filtered by date and count
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Params(query): Params<LogQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let log = state.exercise_log.get_log(&id, &query).await?;

    Ok(Json(log))
}
