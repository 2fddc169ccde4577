//! Commands exposed to the view layer.

pub mod auth;
pub mod language;
pub mod progress;
pub mod study;

pub use auth::{current_user, sign_in, sign_out, sign_up};
pub use language::{get_language, set_language, translate};
pub use progress::{
    get_accuracy, get_category_accuracy, get_category_completion, get_completion,
    get_progress_summary, get_question_progress, get_recommendations, record_attempt,
    reset_progress,
};
pub use study::{
    filter_flash_cards, flip_flash_card, get_fill_in_blank, get_flash_card, get_multiple_choice,
    mark_flash_card, next_fill_in_blank, next_flash_card, next_multiple_choice,
    previous_flash_card, reset_flash_cards, start_fill_in_blank, start_multiple_choice,
    submit_fill_in_blank, submit_multiple_choice,
};

use crate::db::SqliteRepository;
use crate::state::{AppState, Session};
use std::fmt;
use std::sync::{MutexGuard, PoisonError};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CommandError {
    pub message: String,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<crate::db::DbError> for CommandError {
    fn from(e: crate::db::DbError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<civics_core::CoreError> for CommandError {
    fn from(e: civics_core::CoreError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<crate::auth::AuthError> for CommandError {
    fn from(e: crate::auth::AuthError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<crate::config::ConfigError> for CommandError {
    fn from(e: crate::config::ConfigError) -> Self {
        Self { message: e.to_string() }
    }
}

impl<T> From<PoisonError<T>> for CommandError {
    fn from(_: PoisonError<T>) -> Self {
        Self {
            message: "application state lock poisoned".to_string(),
        }
    }
}

type Guards<'a> = (MutexGuard<'a, SqliteRepository>, MutexGuard<'a, Session>);

/// Lock repository and session in the documented order.
fn lock(state: &AppState) -> Result<Guards<'_>, CommandError> {
    let repo = state.repository.lock()?;
    let session = state.session.lock()?;
    Ok((repo, session))
}
