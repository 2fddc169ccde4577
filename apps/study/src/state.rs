//! Application state.

use crate::auth::User;
use crate::config::AppConfig;
use crate::db::{PreferenceRepository, SessionRepository, SqliteRepository};
use crate::progress::ProgressTracker;
use civics_core::{Catalog, FillInBlankQuiz, FlashCardDeck, Language, MultipleChoiceQuiz};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use tracing::{info, warn};

/// Per-window session: identity, preferences and the open study sessions.
pub struct Session {
    pub user: Option<User>,
    pub language: Language,
    pub progress: ProgressTracker,
    pub flash_cards: FlashCardDeck,
    pub multiple_choice: Option<MultipleChoiceQuiz>,
    pub fill_in_blank: Option<FillInBlankQuiz>,
    pub rng: StdRng,
}

/// Global application state.
///
/// Lock order is `repository` before `session`.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub repository: Mutex<SqliteRepository>,
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(repository: SqliteRepository, config: AppConfig) -> Self {
        Self::with_rng(repository, config, StdRng::from_os_rng())
    }

    /// Restore the saved user and language from `repository`.
    pub fn with_rng(repository: SqliteRepository, config: AppConfig, rng: StdRng) -> Self {
        let catalog = Catalog::standard();
        let mut progress = ProgressTracker::new(catalog, config.completion_basis);

        let user = repository.load_user().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable saved user");
            None
        });
        if let Some(user) = &user {
            info!(user_id = %user.id, "restored signed-in user");
            progress.activate(&repository, &user.id);
        }

        let language = repository
            .load_language()
            .unwrap_or_else(|e| {
                warn!(error = %e, "ignoring unreadable language preference");
                None
            })
            .unwrap_or_default();

        let session = Session {
            user,
            language,
            progress,
            flash_cards: FlashCardDeck::new(catalog),
            multiple_choice: None,
            fill_in_blank: None,
            rng,
        };

        Self {
            config,
            catalog,
            repository: Mutex::new(repository),
            session: Mutex::new(session),
        }
    }
}
