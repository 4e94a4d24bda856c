use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;

use crate::config::Config;
use crate::store::WorkoutStore;

pub type DbPool = SqlitePool;

/// Application state handed to every command
pub struct AppState {
  pub store: WorkoutStore,
}

impl AppState {
  pub fn new(db: DbPool, storage_key: impl Into<String>) -> Self {
    Self {
      store: WorkoutStore::new(db, storage_key),
    }
  }
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db(config: &Config) -> Result<DbPool, Box<dyn std::error::Error>> {
  // Create the parent directory if it doesn't exist
  if let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }

  tracing::info!(path = %config.db_path.display(), "Initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&config.database_url())
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Database initialized successfully");

  Ok(pool)
}
