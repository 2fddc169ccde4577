//! Repository pattern over the key-value store.

use crate::auth::User;
use crate::db::error::DbError;
use crate::db::schema::{keys, SCHEMA, SCHEMA_VERSION};
use chrono::Utc;
use civics_core::{AttemptRecord, Category, Language, ProgressStore, StudyMode, Tally};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Opaque string storage keyed by string.
pub trait KeyValueStore {
    fn get_value(&self, key: &str) -> Result<Option<String>>;
    fn set_value(&self, key: &str, value: &str) -> Result<()>;
    fn remove_value(&self, key: &str) -> Result<()>;

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get_value(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        self.set_value(key, &serde_json::to_string(value)?)
    }
}

/// Repository for the signed-in user.
pub trait SessionRepository {
    fn load_user(&self) -> Result<Option<User>>;
    fn save_user(&self, user: &User) -> Result<()>;
    fn clear_user(&self) -> Result<()>;
}

/// Repository for UI preferences.
pub trait PreferenceRepository {
    /// Stored language. Unknown values read as `None`.
    fn load_language(&self) -> Result<Option<Language>>;
    fn save_language(&self, language: Language) -> Result<()>;
}

/// Repository for per-user progress counters.
pub trait ProgressRepository {
    fn load_progress(&self, user_id: &str) -> Result<Option<ProgressStore>>;
    fn save_progress(&self, user_id: &str, store: &ProgressStore) -> Result<()>;
    fn clear_progress(&self, user_id: &str) -> Result<()>;
}

impl<S: KeyValueStore> SessionRepository for S {
    fn load_user(&self) -> Result<Option<User>> {
        self.get_json(keys::USER)
    }

    fn save_user(&self, user: &User) -> Result<()> {
        self.set_json(keys::USER, user)
    }

    fn clear_user(&self) -> Result<()> {
        self.remove_value(keys::USER)
    }
}

impl<S: KeyValueStore> PreferenceRepository for S {
    fn load_language(&self) -> Result<Option<Language>> {
        Ok(self
            .get_value(keys::LANGUAGE)?
            .and_then(|raw| raw.parse().ok()))
    }

    fn save_language(&self, language: Language) -> Result<()> {
        self.set_value(keys::LANGUAGE, language.as_str())
    }
}

impl<S: KeyValueStore> ProgressRepository for S {
    fn load_progress(&self, user_id: &str) -> Result<Option<ProgressStore>> {
        let questions: Option<BTreeMap<u32, AttemptRecord>> =
            self.get_json(&keys::question_progress(user_id))?;
        let categories: Option<BTreeMap<Category, Tally>> =
            self.get_json(&keys::category_progress(user_id))?;
        let modes: Option<BTreeMap<StudyMode, Tally>> =
            self.get_json(&keys::study_mode_progress(user_id))?;

        if questions.is_none() && categories.is_none() && modes.is_none() {
            return Ok(None);
        }

        // Missing parts keep their zeroed defaults
        let mut store = ProgressStore::default();
        if let Some(questions) = questions {
            store.questions = questions;
        }
        if let Some(categories) = categories {
            store.categories.extend(categories);
        }
        if let Some(modes) = modes {
            store.modes.extend(modes);
        }
        Ok(Some(store))
    }

    fn save_progress(&self, user_id: &str, store: &ProgressStore) -> Result<()> {
        self.set_json(&keys::question_progress(user_id), &store.questions)?;
        self.set_json(&keys::category_progress(user_id), &store.categories)?;
        self.set_json(&keys::study_mode_progress(user_id), &store.modes)?;
        Ok(())
    }

    fn clear_progress(&self, user_id: &str) -> Result<()> {
        self.remove_value(&keys::question_progress(user_id))?;
        self.remove_value(&keys::category_progress(user_id))?;
        self.remove_value(&keys::study_mode_progress(user_id))?;
        Ok(())
    }
}

/// SQLite-backed key-value store.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn
            .pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(())
    }

    /// Stored keys starting with `prefix`, sorted.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_store WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key")?;
        let keys = stmt
            .query_map(params![prefix], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteRepository {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn set_value(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove_value(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        assert_eq!(repo.get_value("a").unwrap(), None);

        repo.set_value("a", "1").unwrap();
        repo.set_value("a", "2").unwrap();
        assert_eq!(repo.get_value("a").unwrap().as_deref(), Some("2"));

        repo.remove_value("a").unwrap();
        assert_eq!(repo.get_value("a").unwrap(), None);
    }

    #[test]
    fn unknown_language_reads_as_none() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.set_value(keys::LANGUAGE, "fr").unwrap();
        assert_eq!(repo.load_language().unwrap(), None);

        repo.save_language(Language::Es).unwrap();
        assert_eq!(repo.load_language().unwrap(), Some(Language::Es));
    }

    #[test]
    fn progress_is_stored_per_user() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        let mut store = ProgressStore::default();
        store.record_attempt(1, StudyMode::FlashCards, true, Some(Category::AmericanGovernment), Utc::now());

        repo.save_progress("user_a", &store).unwrap();
        assert_eq!(repo.load_progress("user_a").unwrap(), Some(store));
        assert_eq!(repo.load_progress("user_b").unwrap(), None);

        assert_eq!(
            repo.keys_with_prefix("patrias_").unwrap(),
            vec![
                "patrias_category_progress_user_a".to_string(),
                "patrias_question_progress_user_a".to_string(),
                "patrias_study_mode_progress_user_a".to_string(),
            ]
        );

        repo.clear_progress("user_a").unwrap();
        assert_eq!(repo.load_progress("user_a").unwrap(), None);
        assert!(repo.keys_with_prefix("patrias_").unwrap().is_empty());
    }

    #[test]
    fn malformed_progress_is_an_error() {
        let repo = SqliteRepository::open_in_memory().unwrap();
        repo.set_value(&keys::question_progress("u"), "{not json").unwrap();
        assert!(matches!(repo.load_progress("u"), Err(DbError::Json(_))));
    }
}
