//! Shared setup for command integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use patrias_study::db::SqliteRepository;
use patrias_study::{AppConfig, AppState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

/// App state over a database file in a temporary directory.
///
/// Keep the context alive for as long as the database is in use.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("patrias.db")
    }

    /// Open (or reopen) the app over the context's database.
    pub fn open(&self) -> AppState {
        open_at(&self.db_path(), AppConfig::default())
    }

    pub fn open_with(&self, config: AppConfig) -> AppState {
        open_at(&self.db_path(), config)
    }
}

/// App state over an in-memory database with a seeded generator.
pub fn in_memory() -> AppState {
    let repository = SqliteRepository::open_in_memory().expect("in-memory database");
    AppState::with_rng(repository, AppConfig::default(), StdRng::seed_from_u64(7))
}

fn open_at(path: &Path, mut config: AppConfig) -> AppState {
    config.db_path = path.to_path_buf();
    let repository = SqliteRepository::open(path).expect("open database");
    AppState::with_rng(repository, config, StdRng::seed_from_u64(7))
}
