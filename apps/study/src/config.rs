//! Environment configuration.

use civics_core::{CompletionBasis, DEFAULT_QUIZ_LENGTH};
use std::path::PathBuf;
use thiserror::Error;

pub const DB_PATH_VAR: &str = "PATRIAS_DB_PATH";
pub const COMPLETION_BASIS_VAR: &str = "PATRIAS_COMPLETION_BASIS";
pub const QUIZ_LENGTH_VAR: &str = "PATRIAS_QUIZ_LENGTH";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {COMPLETION_BASIS_VAR} {0:?}, expected \"catalog\" or \"legacy\"")]
    InvalidCompletionBasis(String),

    #[error("invalid {QUIZ_LENGTH_VAR} {0:?}, expected a positive integer")]
    InvalidQuizLength(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub completion_basis: CompletionBasis,
    pub quiz_length: usize,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            completion_basis: CompletionBasis::default(),
            quiz_length: DEFAULT_QUIZ_LENGTH,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment and `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Unset or blank values use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(DB_PATH_VAR) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(raw) = get(COMPLETION_BASIS_VAR) {
            config.completion_basis = CompletionBasis::parse(raw.trim())
                .ok_or(ConfigError::InvalidCompletionBasis(raw))?;
        }

        if let Some(raw) = get(QUIZ_LENGTH_VAR) {
            config.quiz_length = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidQuizLength(raw)),
            };
        }

        if let Some(filter) = get(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

/// `<local data dir>/patrias/patrias.db`, or the working directory if unknown.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("patrias")
        .join("patrias.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.quiz_length, 10);
        assert_eq!(config.completion_basis, CompletionBasis::Catalog);
        assert!(config.db_path.ends_with("patrias/patrias.db"));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/p.db"),
            (COMPLETION_BASIS_VAR, "legacy"),
            (QUIZ_LENGTH_VAR, "20"),
            (LOG_FILTER_VAR, "patrias_study=debug"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/p.db"));
        assert_eq!(config.completion_basis, CompletionBasis::Legacy);
        assert_eq!(config.quiz_length, 20);
        assert_eq!(config.log_filter, "patrias_study=debug");
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[(COMPLETION_BASIS_VAR, "weighted")])),
            Err(ConfigError::InvalidCompletionBasis("weighted".into()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[(QUIZ_LENGTH_VAR, "0")])),
            Err(ConfigError::InvalidQuizLength("0".into()))
        );
    }
}
