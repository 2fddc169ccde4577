//! Language preference commands.

use super::{lock, CommandError};
use crate::db::PreferenceRepository;
use crate::state::AppState;
use civics_core::{i18n, Language};
use tracing::warn;

pub fn get_language(state: &AppState) -> Result<Language, CommandError> {
    Ok(state.session.lock()?.language)
}

/// Accepts `en` or `es`.
pub fn set_language(state: &AppState, language: &str) -> Result<Language, CommandError> {
    let language: Language = language.parse()?;
    let (repo, mut session) = lock(state)?;
    session.language = language;
    if let Err(e) = repo.save_language(language) {
        warn!(error = %e, "failed to save language preference");
    }
    Ok(language)
}

/// UI string for `key` in the current language.
pub fn translate(state: &AppState, key: &str) -> Result<String, CommandError> {
    let language = state.session.lock()?.language;
    Ok(i18n::translate(language, key).to_string())
}
