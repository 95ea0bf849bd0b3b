//! Application state shared across handlers

use std::sync::Arc;

use crate::{
    directory::UserDirectory,
    exercise_log::ExerciseLog,
    repositories::{ExerciseStore, UserStore},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_directory: UserDirectory,
    pub exercise_log: ExerciseLog,
}

impl AppState {
    /// Wire both services over the given stores
    pub fn new(users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>) -> Self {
        let user_directory = UserDirectory::new(users);
        let exercise_log = ExerciseLog::new(user_directory.clone(), exercises);

        Self {
            user_directory,
            exercise_log,
        }
    }
}
