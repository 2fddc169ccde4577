//! Progress page commands.
//!
//! All figures read 0 while nobody is signed in.

use super::{lock, CommandError};
use crate::state::AppState;
use civics_core::{AttemptRecord, Category, ProgressSummary, Recommendation, StudyMode};

/// Record an attempt made outside a study session.
/// Returns false when nobody is signed in.
pub fn record_attempt(
    state: &AppState,
    question_id: u32,
    mode: &str,
    is_correct: bool,
    category: Option<&str>,
) -> Result<bool, CommandError> {
    let mode: StudyMode = mode.parse()?;
    let category = category.map(str::parse::<Category>).transpose()?;
    let (repo, mut session) = lock(state)?;
    Ok(session
        .progress
        .record_attempt(&*repo, question_id, mode, is_correct, category))
}

pub fn get_progress_summary(state: &AppState) -> Result<ProgressSummary, CommandError> {
    Ok(state.session.lock()?.progress.summary())
}

/// Completion for `mode`, or overall when `None`.
pub fn get_completion(state: &AppState, mode: Option<&str>) -> Result<u32, CommandError> {
    let mode = mode.map(str::parse::<StudyMode>).transpose()?;
    Ok(state.session.lock()?.progress.completion_percentage(mode))
}

/// Accuracy for `mode`, or overall when `None`.
pub fn get_accuracy(state: &AppState, mode: Option<&str>) -> Result<u32, CommandError> {
    let mode = mode.map(str::parse::<StudyMode>).transpose()?;
    Ok(state.session.lock()?.progress.accuracy_percentage(mode))
}

pub fn get_category_completion(state: &AppState, category: &str) -> Result<u32, CommandError> {
    let category: Category = category.parse()?;
    Ok(state
        .session
        .lock()?
        .progress
        .category_completion_percentage(category))
}

pub fn get_category_accuracy(state: &AppState, category: &str) -> Result<u32, CommandError> {
    let category: Category = category.parse()?;
    Ok(state
        .session
        .lock()?
        .progress
        .category_accuracy_percentage(category))
}

pub fn get_question_progress(
    state: &AppState,
    question_id: u32,
) -> Result<Option<AttemptRecord>, CommandError> {
    state.catalog.require(question_id)?;
    Ok(state.session.lock()?.progress.question(question_id).cloned())
}

pub fn get_recommendations(state: &AppState) -> Result<Vec<Recommendation>, CommandError> {
    Ok(state.session.lock()?.progress.recommendations())
}

/// Returns false when nobody is signed in.
pub fn reset_progress(state: &AppState) -> Result<bool, CommandError> {
    let (repo, mut session) = lock(state)?;
    Ok(session.progress.reset(&*repo))
}
