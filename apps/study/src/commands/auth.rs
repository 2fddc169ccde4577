//! Sign-in commands.

use super::{lock, CommandError};
use crate::auth::{self, User};
use crate::db::{SessionRepository, SqliteRepository};
use crate::state::{AppState, Session};
use tracing::{info, warn};

/// Sign in and load the new identity's progress.
pub fn sign_in(state: &AppState, email: &str, password: &str) -> Result<User, CommandError> {
    let user = auth::sign_in(email, password)?;
    let (repo, mut session) = lock(state)?;
    switch_user(&repo, &mut session, user.clone());
    Ok(user)
}

pub fn sign_up(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, CommandError> {
    let user = auth::sign_up(name, email, password)?;
    let (repo, mut session) = lock(state)?;
    switch_user(&repo, &mut session, user.clone());
    Ok(user)
}

/// Sign out and clear in-memory progress. Saved progress is kept.
pub fn sign_out(state: &AppState) -> Result<(), CommandError> {
    let (repo, mut session) = lock(state)?;
    if let Some(user) = session.user.take() {
        info!(user_id = %user.id, "signed out");
    }
    session.progress.deactivate();
    if let Err(e) = repo.clear_user() {
        warn!(error = %e, "failed to clear saved user");
    }
    Ok(())
}

pub fn current_user(state: &AppState) -> Result<Option<User>, CommandError> {
    let session = state.session.lock()?;
    Ok(session.user.clone())
}

fn switch_user(repo: &SqliteRepository, session: &mut Session, user: User) {
    info!(user_id = %user.id, "signed in");
    if let Err(e) = repo.save_user(&user) {
        warn!(error = %e, "failed to save signed-in user");
    }
    session.progress.activate(repo, &user.id);
    session.user = Some(user);
}
