//! Patrias study application: storage, identity, progress tracking and the
//! commands driven by the view layer.

pub mod auth;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod progress;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use state::AppState;

use db::SqliteRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the fmt subscriber filtered by `filter`. Later calls are ignored.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}

/// Load configuration, set up logging and open the database.
pub fn run() -> Result<AppState, AppError> {
    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    // Ensure data directory exists
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!(path = %config.db_path.display(), "Opening database...");
    let repository = SqliteRepository::open(&config.db_path)?;

    Ok(AppState::new(repository, config))
}
