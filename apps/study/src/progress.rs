//! Progress tracking for the active identity.
//!
//! The tracker owns the in-memory [`ProgressStore`] of whoever is signed in.
//! With no identity every mutation is a no-op and every figure reads 0.
//! Each change is written through to the repository; write failures are
//! logged and the in-memory state is kept.

use crate::db::ProgressRepository;
use chrono::Utc;
use civics_core::progress::ProgressReport;
use civics_core::{
    recommendations, Attempt, AttemptRecord, Catalog, Category, CompletionBasis, ProgressStore,
    ProgressSummary, Recommendation, StudyMode,
};
use tracing::{debug, info, warn};

#[derive(Debug)]
struct ActiveProgress {
    user_id: String,
    store: ProgressStore,
}

#[derive(Debug)]
pub struct ProgressTracker {
    catalog: Catalog,
    basis: CompletionBasis,
    active: Option<ActiveProgress>,
}

impl ProgressTracker {
    pub fn new(catalog: Catalog, basis: CompletionBasis) -> Self {
        Self {
            catalog,
            basis,
            active: None,
        }
    }

    /// Switch to `user_id` and load its saved progress.
    /// Unreadable saved data starts the identity from zero.
    pub fn activate<R: ProgressRepository>(&mut self, repo: &R, user_id: &str) {
        let store = match repo.load_progress(user_id) {
            Ok(Some(store)) => store,
            Ok(None) => ProgressStore::default(),
            Err(e) => {
                warn!(user_id, error = %e, "ignoring unreadable saved progress");
                ProgressStore::default()
            }
        };

        info!(user_id, attempted = store.unique_attempted(), "progress loaded");
        self.active = Some(ActiveProgress {
            user_id: user_id.to_string(),
            store,
        });
    }

    /// Drop the in-memory progress. Saved progress is kept.
    pub fn deactivate(&mut self) {
        if let Some(active) = self.active.take() {
            info!(user_id = %active.user_id, "progress unloaded");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.user_id.as_str())
    }

    pub fn store(&self) -> Option<&ProgressStore> {
        self.active.as_ref().map(|a| &a.store)
    }

    pub fn question(&self, question_id: u32) -> Option<&AttemptRecord> {
        self.store()?.question(question_id)
    }

    /// Count one attempt. Returns false (and changes nothing) when signed out.
    pub fn record_attempt<R: ProgressRepository>(
        &mut self,
        repo: &R,
        question_id: u32,
        mode: StudyMode,
        is_correct: bool,
        category: Option<Category>,
    ) -> bool {
        let Some(active) = self.active.as_mut() else {
            debug!(question_id, "attempt ignored without a signed-in user");
            return false;
        };

        active
            .store
            .record_attempt(question_id, mode, is_correct, category, Utc::now());
        debug!(question_id, mode = %mode, is_correct, "attempt recorded");
        persist(repo, active);
        true
    }

    /// Count an attempt produced by a study session.
    pub fn record<R: ProgressRepository>(&mut self, repo: &R, attempt: &Attempt) -> bool {
        self.record_attempt(
            repo,
            attempt.question_id,
            attempt.mode,
            attempt.is_correct,
            attempt.category,
        )
    }

    /// Zero all counters and remove the saved copy. No-op when signed out.
    pub fn reset<R: ProgressRepository>(&mut self, repo: &R) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        active.store.reset();
        if let Err(e) = repo.clear_progress(&active.user_id) {
            warn!(user_id = %active.user_id, error = %e, "failed to clear saved progress");
        }
        info!(user_id = %active.user_id, "progress reset");
        true
    }

    fn report(&self) -> Option<ProgressReport<'_>> {
        self.store()
            .map(|store| ProgressReport::new(store, self.catalog, self.basis))
    }

    pub fn completion_percentage(&self, mode: Option<StudyMode>) -> u32 {
        self.report()
            .map_or(0, |r| r.completion_percentage(mode))
    }

    pub fn accuracy_percentage(&self, mode: Option<StudyMode>) -> u32 {
        self.report().map_or(0, |r| r.accuracy_percentage(mode))
    }

    pub fn category_completion_percentage(&self, category: Category) -> u32 {
        self.report()
            .map_or(0, |r| r.category_completion_percentage(category))
    }

    pub fn category_accuracy_percentage(&self, category: Category) -> u32 {
        self.report()
            .map_or(0, |r| r.category_accuracy_percentage(category))
    }

    pub fn readiness_percentage(&self) -> u32 {
        self.report().map_or(0, |r| r.readiness_percentage())
    }

    /// All figures, zeroed when signed out.
    pub fn summary(&self) -> ProgressSummary {
        self.report()
            .map(|r| r.summary())
            .unwrap_or_else(|| ProgressSummary::empty(self.catalog))
    }

    /// Empty when signed out.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.report()
            .map(|r| recommendations(&r))
            .unwrap_or_default()
    }
}

fn persist<R: ProgressRepository>(repo: &R, active: &ActiveProgress) {
    if let Err(e) = repo.save_progress(&active.user_id, &active.store) {
        warn!(user_id = %active.user_id, error = %e, "failed to save progress");
    }
}
