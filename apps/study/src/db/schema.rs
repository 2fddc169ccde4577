//! SQLite schema and storage keys.

/// Current schema version, stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Key-value table standing in for browser local storage.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Keys of stored values.
pub mod keys {
    /// Signed-in user as JSON.
    pub const USER: &str = "patrias_user";

    /// Language preference, `en` or `es`.
    pub const LANGUAGE: &str = "patrias_language";

    pub fn question_progress(user_id: &str) -> String {
        format!("patrias_question_progress_{user_id}")
    }

    pub fn category_progress(user_id: &str) -> String {
        format!("patrias_category_progress_{user_id}")
    }

    pub fn study_mode_progress(user_id: &str) -> String {
        format!("patrias_study_mode_progress_{user_id}")
    }
}
